use proptest::prelude::*;
use solution_tree::model::ProjectItemEntry;
use solution_tree::tree::{group_dependent_files, sort_by_display_name};
use std::collections::HashMap;
use std::path::PathBuf;

/// Files `F0.cs .. Fn.cs` in one directory; `links[i]` names the index file `i`
/// depends on. Indices past the end point at files that do not exist.
fn files_with_links(links: &[Option<usize>]) -> Vec<ProjectItemEntry> {
    links
        .iter()
        .enumerate()
        .map(|(i, link)| {
            let name = format!("F{i}.cs");
            let entry = ProjectItemEntry::file(name.clone(), format!("/p/{name}"));
            match link {
                Some(target) => entry.with_dependent_upon(format!("F{target}.cs")),
                None => entry,
            }
        })
        .collect()
}

fn links_strategy() -> impl Strategy<Value = Vec<Option<usize>>> {
    (1usize..12).prop_flat_map(|n| prop::collection::vec(prop::option::of(0..n + 2), n))
}

proptest! {
    #[test]
    fn every_file_lands_in_exactly_one_group(links in links_strategy()) {
        let files = files_with_links(&links);
        let refs: Vec<&ProjectItemEntry> = files.iter().collect();
        let groups = group_dependent_files(&refs, false);

        let mut seen: HashMap<PathBuf, usize> = HashMap::new();
        for group in &groups {
            for entry in std::iter::once(group.root).chain(group.related.iter().copied()) {
                *seen.entry(entry.full_path.clone()).or_default() += 1;
            }
        }
        prop_assert_eq!(seen.len(), files.len());
        prop_assert!(seen.values().all(|&count| count == 1));
    }

    #[test]
    fn linked_files_share_a_group(links in links_strategy()) {
        let files = files_with_links(&links);
        let refs: Vec<&ProjectItemEntry> = files.iter().collect();
        let groups = group_dependent_files(&refs, false);

        let mut group_of: HashMap<PathBuf, usize> = HashMap::new();
        for (index, group) in groups.iter().enumerate() {
            for entry in std::iter::once(group.root).chain(group.related.iter().copied()) {
                group_of.insert(entry.full_path.clone(), index);
            }
        }
        for (i, link) in links.iter().enumerate() {
            if let Some(target) = link.filter(|&t| t < links.len()) {
                let own = group_of[&PathBuf::from(format!("/p/F{i}.cs"))];
                let parent = group_of[&PathBuf::from(format!("/p/F{target}.cs"))];
                prop_assert_eq!(own, parent);
            }
        }
    }

    #[test]
    fn group_roots_follow_scan_order(links in links_strategy()) {
        let files = files_with_links(&links);
        let refs: Vec<&ProjectItemEntry> = files.iter().collect();
        let positions: Vec<usize> = group_dependent_files(&refs, false)
            .iter()
            .map(|group| files.iter().position(|f| f == group.root).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(positions.first().copied(), Some(0));
    }

    #[test]
    fn grouping_is_deterministic(links in links_strategy(), nesting in any::<bool>()) {
        let files = files_with_links(&links);
        let refs: Vec<&ProjectItemEntry> = files.iter().collect();
        prop_assert_eq!(
            group_dependent_files(&refs, nesting),
            group_dependent_files(&refs, nesting)
        );
    }

    #[test]
    fn display_sort_is_case_insensitive_and_stable(
        names in prop::collection::vec("[a-cA-C]{1,3}", 0..16)
    ) {
        let indexed: Vec<(usize, String)> = names.into_iter().enumerate().collect();
        let sorted = sort_by_display_name(&indexed, |(_, name)| name.as_str());
        prop_assert_eq!(sorted.len(), indexed.len());
        for pair in sorted.windows(2) {
            let (left, right) = (pair[0].1.to_lowercase(), pair[1].1.to_lowercase());
            prop_assert!(left <= right);
            if left == right {
                prop_assert!(pair[0].0 < pair[1].0);
            }
        }
    }
}

#[test]
fn designer_file_nests_under_form() {
    let files = vec![
        ProjectItemEntry::file("Foo.cs", "/p/Foo.cs"),
        ProjectItemEntry::file("Foo.Designer.cs", "/p/Foo.Designer.cs")
            .with_dependent_upon("Foo.cs"),
        ProjectItemEntry::file("Bar.cs", "/p/Bar.cs"),
    ];
    let refs: Vec<&ProjectItemEntry> = files.iter().collect();
    let groups = group_dependent_files(&refs, false);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].root.name, "Foo.cs");
    assert_eq!(groups[0].related[0].name, "Foo.Designer.cs");
    assert_eq!(groups[1].root.name, "Bar.cs");
    assert!(groups[1].related.is_empty());
}
