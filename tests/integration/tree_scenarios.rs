use crate::support::{child, labels, LockedProject, TableFactory};
use solution_tree::config::TreeOptions;
use solution_tree::error::ApiError;
use solution_tree::model::{
    PackageMetadata, PackageReference, ProjectItemEntry, Solution, SolutionFolder,
    SolutionProject,
};
use solution_tree::project::{InMemoryProject, ProjectKind};
use solution_tree::tree::{context_values, create_from_solution, CollapsibleState, TreeNode};
use solution_tree::types::PackageDependencyMap;
use std::path::Path;
use std::sync::Arc;

fn root(solution: Solution, factory: TableFactory, options: TreeOptions) -> TreeNode {
    create_from_solution(Arc::new(factory), Arc::new(solution), "/repo", options)
}

fn web_project() -> InMemoryProject {
    InMemoryProject::new(vec![
        ProjectItemEntry::file("Program.cs", "/repo/Web/Program.cs"),
        ProjectItemEntry::directory("Views", "/repo/Web/Views"),
        ProjectItemEntry::directory("Views/Home", "/repo/Web/Views/Home"),
        ProjectItemEntry::file("Views/Home/Index.cshtml", "/repo/Web/Views/Home/Index.cshtml"),
        ProjectItemEntry::file(
            "Views/Home/Index.cshtml.cs",
            "/repo/Web/Views/Home/Index.cshtml.cs",
        )
        .with_dependent_upon("Index.cshtml"),
        ProjectItemEntry::file("Shared.cs", "/repo/Common/Shared.cs").as_link(),
        ProjectItemEntry::directory("assets", "/repo/Web/assets"),
    ])
}

#[tokio::test]
async fn solution_lists_folders_then_projects_sorted() {
    let mut solution = Solution::new("Shop", "/repo/Shop.sln");
    solution.folders = vec![SolutionFolder::new("Tests"), SolutionFolder::new("Src")];
    solution.projects = vec![
        SolutionProject::new("Lib", "/repo/Lib/Lib.csproj"),
        SolutionProject::new("App", "/repo/App/App.csproj"),
    ];
    let factory = TableFactory::default()
        .with("/repo/Lib/Lib.csproj", ProjectKind::Standard, InMemoryProject::default())
        .with("/repo/App/App.csproj", ProjectKind::Cps, InMemoryProject::default());

    let children = root(solution, factory, TreeOptions::default())
        .children()
        .await
        .unwrap();
    assert_eq!(labels(&children), vec!["Src", "Tests", "App", "Lib"]);
    assert_eq!(children[0].context_value(), context_values::SOLUTION_FOLDER);
    assert_eq!(children[2].context_value(), context_values::PROJECT_CPS);
    assert_eq!(children[3].context_value(), context_values::PROJECT_STANDARD);
}

#[tokio::test]
async fn solution_folder_lists_solution_files_last_in_mapping_order() {
    let mut docs = SolutionFolder::new("Docs");
    docs.projects = vec![SolutionProject::new("Site", "/repo/Site/Site.csproj")];
    docs.solution_files
        .insert("README.md".to_string(), "docs/README.md".to_string());
    docs.solution_files
        .insert("CHANGELOG.md".to_string(), "CHANGELOG.md".to_string());
    let mut solution = Solution::new("Shop", "/repo/Shop.sln");
    solution.folders = vec![docs];
    let factory = TableFactory::default().with(
        "/repo/Site/Site.csproj",
        ProjectKind::Generic,
        InMemoryProject::default(),
    );

    let top = root(solution, factory, TreeOptions::default())
        .children()
        .await
        .unwrap();
    let docs = top[0].children().await.unwrap();
    assert_eq!(labels(&docs), vec!["Site", "README.md", "CHANGELOG.md"]);
    assert_eq!(docs[0].context_value(), context_values::PROJECT);
    assert_eq!(docs[1].context_value(), context_values::SOLUTION_FILE);
    assert_eq!(docs[1].path(), Some(Path::new("/repo/docs/README.md")));
    assert_eq!(docs[2].collapsible_state(), CollapsibleState::None);
}

#[tokio::test]
async fn unparseable_and_missing_projects_show_as_unknown() {
    let mut solution = Solution::new("Shop", "/repo/Shop.sln");
    solution.projects = vec![
        SolutionProject::new("Broken", "/repo/Broken/Broken.csproj"),
        SolutionProject::new("Ghost", "/repo/Ghost/Ghost.csproj"),
    ];
    let factory = TableFactory::default().failing("/repo/Broken/Broken.csproj");

    let children = root(solution, factory, TreeOptions::default())
        .children()
        .await
        .unwrap();
    assert_eq!(labels(&children), vec!["Broken", "Ghost"]);
    for node in &children {
        assert_eq!(node.context_value(), context_values::UNKNOWN_PROJECT);
        assert_eq!(node.description(), Some("unloaded"));
        assert_eq!(node.collapsible_state(), CollapsibleState::None);
        assert!(node.children().await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn project_folders_expand_by_virtual_path() {
    let mut solution = Solution::new("Shop", "/repo/Shop.sln");
    solution.projects = vec![SolutionProject::new("Web", "/repo/Web/Web.csproj")];
    let factory =
        TableFactory::default().with("/repo/Web/Web.csproj", ProjectKind::Cps, web_project());

    let projects = root(solution, factory, TreeOptions::default())
        .children()
        .await
        .unwrap();
    let web = projects[0].children().await.unwrap();
    assert_eq!(labels(&web), vec!["assets", "Views", "Program.cs", "Shared.cs"]);
    assert_eq!(child(&web, "Shared.cs").description(), Some("link"));
    assert_eq!(child(&web, "Views").context_value(), context_values::PROJECT_FOLDER);
    assert!(child(&web, "assets").children().await.unwrap().is_empty());

    let views = child(&web, "Views").children().await.unwrap();
    assert_eq!(labels(&views), vec!["Home"]);
    let home = views[0].children().await.unwrap();
    assert_eq!(labels(&home), vec!["Index.cshtml"]);
    assert_eq!(home[0].collapsible_state(), CollapsibleState::Collapsed);
    let nested = home[0].children().await.unwrap();
    assert_eq!(labels(&nested), vec!["Index.cshtml.cs"]);
    assert_eq!(nested[0].description(), Some("dependent"));
}

#[tokio::test]
async fn item_nesting_groups_by_file_name() {
    let mut solution = Solution::new("Desktop", "/repo/Desktop.sln");
    solution.projects = vec![SolutionProject::new("Forms", "/repo/Forms/Forms.csproj")];
    let source = InMemoryProject::new(vec![
        ProjectItemEntry::file("Form1.cs", "/repo/Forms/Form1.cs"),
        ProjectItemEntry::file("Form1.Designer.cs", "/repo/Forms/Form1.Designer.cs"),
        ProjectItemEntry::file("Form1.resx", "/repo/Forms/Form1.resx"),
    ]);
    let options = TreeOptions {
        item_nesting: true,
        ..TreeOptions::default()
    };
    let factory =
        TableFactory::default().with("/repo/Forms/Forms.csproj", ProjectKind::Standard, source);

    let projects = root(solution, factory, options).children().await.unwrap();
    let files = projects[0].children().await.unwrap();
    assert_eq!(labels(&files), vec!["Form1.cs", "Form1.resx"]);
    let nested = files[0].children().await.unwrap();
    assert_eq!(labels(&nested), vec!["Form1.Designer.cs"]);
}

#[tokio::test]
async fn entries_failure_stays_local_to_the_project() {
    let mut solution = Solution::new("Shop", "/repo/Shop.sln");
    solution.projects = vec![
        SolutionProject::new("Locked", "/repo/Locked/Locked.csproj"),
        SolutionProject::new("Web", "/repo/Web/Web.csproj"),
    ];
    let factory = TableFactory::default()
        .with_source(
            "/repo/Locked/Locked.csproj",
            ProjectKind::Cps,
            Arc::new(LockedProject),
        )
        .with("/repo/Web/Web.csproj", ProjectKind::Cps, web_project());

    let projects = root(solution, factory, TreeOptions::default())
        .children()
        .await
        .unwrap();
    assert_eq!(labels(&projects), vec!["Locked", "Web"]);

    let locked = projects[0].children().await;
    assert!(matches!(locked, Err(ApiError::ProjectEntries { .. })));
    assert_eq!(projects[1].children().await.unwrap().len(), 4);
}

#[tokio::test]
async fn packages_resolve_one_level_per_expansion() {
    let mut dependencies = PackageDependencyMap::new();
    dependencies.insert(
        "microsoft.extensions.logging".to_string(),
        PackageMetadata::with_dependencies([
            ("Microsoft.Extensions.Options", "8.0.0"),
            ("Microsoft.Extensions.Primitives", "8.0.0"),
        ]),
    );
    dependencies.insert(
        "Microsoft.Extensions.Options".to_string(),
        PackageMetadata::default(),
    );
    let source = InMemoryProject::default().with_packages(
        vec![
            PackageReference::new("Microsoft.Extensions.Logging", "8.0.0"),
            PackageReference::new("Dapper", "2.1.35"),
        ],
        dependencies,
    );
    let mut solution = Solution::new("Shop", "/repo/Shop.sln");
    solution.projects = vec![SolutionProject::new("Api", "/repo/Api/Api.csproj")];
    let factory = TableFactory::default().with("/repo/Api/Api.csproj", ProjectKind::Cps, source);

    let projects = root(solution, factory, TreeOptions::default())
        .children()
        .await
        .unwrap();
    let api = projects[0].children().await.unwrap();
    assert_eq!(labels(&api), vec!["Packages"]);

    let packages = api[0].children().await.unwrap();
    assert_eq!(labels(&packages), vec!["Microsoft.Extensions.Logging", "Dapper"]);
    assert_eq!(packages[0].context_value(), context_values::PROJECT_PACKAGE);
    assert_eq!(packages[1].collapsible_state(), CollapsibleState::None);

    let level_two = packages[0].children().await.unwrap();
    assert_eq!(
        labels(&level_two),
        vec![
            "Microsoft.Extensions.Options",
            "Microsoft.Extensions.Primitives"
        ]
    );
    assert_eq!(level_two[0].description(), Some("8.0.0"));
    assert!(level_two[0].children().await.unwrap().is_empty());
}
