use solution_tree::config::TreeOptions;
use solution_tree::snapshot::SolutionSnapshot;
use solution_tree::tooling::{CliContext, Commands};
use solution_tree::tree::{create_from_solution, render_tree};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

const SNAPSHOT_TOML: &str = r#"
[solution]
name = "Billing"
full_path = "/repo/Billing.sln"
folder_path = "/repo"

[[solution.folders]]
name = "Docs"

[solution.folders.solution_files]
"README.md" = "README.md"

[[solution.projects]]
name = "Invoices"
full_path = "/repo/Invoices/Invoices.fsproj"

[[projects]]
full_path = "/repo/Invoices/Invoices.fsproj"
type = "cps"

[[projects.entries]]
name = "Invoice.fs"
relative_path = "Invoice.fs"
full_path = "/repo/Invoices/Invoice.fs"

[[projects.entries]]
name = "Invoice.g.fs"
relative_path = "Invoice.g.fs"
full_path = "/repo/Invoices/Invoice.g.fs"
dependent_upon = "Invoice.fs"
"#;

#[tokio::test]
async fn toml_snapshot_renders_full_tree() {
    let snapshot = SolutionSnapshot::from_toml_str(SNAPSHOT_TOML).unwrap();
    let (solution, factory) = snapshot.into_parts();
    let root = create_from_solution(
        Arc::new(factory),
        Arc::new(solution),
        "/repo",
        TreeOptions::default(),
    );

    let expected = "\
Billing
├── Docs
│   └── README.md
└── Invoices
    └── Invoice.fs
        └── Invoice.g.fs (dependent)
";
    assert_eq!(render_tree(&root, 5).await, expected);
}

#[tokio::test]
async fn show_command_reads_toml_snapshot_and_honours_depth() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("billing.toml");
    fs::write(&path, SNAPSHOT_TOML).unwrap();
    let context = CliContext::new(temp.path().to_path_buf(), None).unwrap();

    let output = context
        .execute(&Commands::Show {
            snapshot: path,
            depth: 1,
            format: "text".to_string(),
            item_nesting: false,
            no_color: true,
        })
        .await
        .unwrap();
    assert_eq!(output, "Billing\n├── Docs\n└── Invoices");
}

#[tokio::test]
async fn fsharp_project_files_carry_suffix_in_json() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("billing.toml");
    fs::write(&path, SNAPSHOT_TOML).unwrap();
    let context = CliContext::new(temp.path().to_path_buf(), None).unwrap();

    let output = context
        .execute(&Commands::Show {
            snapshot: path,
            depth: 3,
            format: "json".to_string(),
            item_nesting: false,
            no_color: true,
        })
        .await
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    let invoices = &value["children"][1];
    assert_eq!(invoices["context_value"], "project-cps");
    assert_eq!(invoices["children"][0]["context_value"], "project-file-fs");
}
