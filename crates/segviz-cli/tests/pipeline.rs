//! End-to-end pipeline tests: JSON config and protocol CSV in, DOT files
//! out, with per-application failure isolation.

use std::fs;

use segviz::{SegvizOptions, run_main};

const PROTOCOLS_CSV: &str = "Decimal,Keyword,Protocol\n\
    1,ICMP,Internet Control Message\n\
    6,TCP,Transmission Control\n\
    146-252,,Unassigned\n";

fn opts(dir: &tempfile::TempDir, config: &std::path::Path, include_ports: bool) -> SegvizOptions {
    SegvizOptions {
        configs: vec![config.to_string_lossy().into_owned()],
        protocols: dir
            .path()
            .join("protocols.csv")
            .to_string_lossy()
            .into_owned(),
        include_ports,
        output_dir: dir.path().to_string_lossy().into_owned(),
    }
}

#[test]
fn writes_one_diagram_per_application_and_isolates_failures() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("protocols.csv"), PROTOCOLS_CSV).unwrap();

    let config = dir.path().join("apps.json");
    fs::write(
        &config,
        r#"[
            {
                "name": "ERP",
                "app_scope": {"name": "ERP"},
                "clusters": [
                    {"id": "c1", "name": "web", "nodes": [{"name": "web-1"}]}
                ],
                "inventory_filters": [
                    {"id": "f1", "name": "ERP"},
                    {"id": "f2", "name": "Shared DNS"}
                ],
                "default_policies": [
                    {
                        "consumer_filter_id": "c1",
                        "provider_filter_id": "f2",
                        "l4_params": [{"proto": 6, "port": [443, 443]}, {"proto": 17}]
                    }
                ]
            },
            {
                "name": "Broken",
                "app_scope": {"name": "Broken"},
                "inventory_filters": [{"name": "record without an id"}]
            },
            {
                "name": "Billing/Prod",
                "app_scope": {"name": "Billing/Prod"}
            }
        ]"#,
    )
    .unwrap();

    let summary = run_main(&opts(&dir, &config, true)).unwrap();
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.written.len(), 2);

    let erp = fs::read_to_string(dir.path().join("ERP.dot")).unwrap();
    // Protocol 6 resolves through the table, 17 is absent and falls back.
    assert!(erp.contains("c1 -> f2 [label=\"TCP=443; PROTO-17\"];"));
    assert!(erp.contains("Application Policy Groups"));
    assert!(erp.contains("External Policy Groups"));
    // One internal cluster + one internal filter vs one external filter.
    assert!(erp.contains("rankdir=\"RL\";"));

    // Slashes in the application name become dashes in the file name.
    let billing = fs::read_to_string(dir.path().join("Billing-Prod.dot")).unwrap();
    assert!(billing.contains("Application Name: Billing/Prod"));

    // The failed application left no partial output behind.
    assert!(!dir.path().join("Broken.dot").exists());
}

#[test]
fn no_ports_run_skips_table_and_suffixes_file_names() {
    let dir = tempfile::tempdir().unwrap();
    // Deliberately no protocols.csv on disk: a no-ports run must not read it.

    let config = dir.path().join("app.json");
    fs::write(
        &config,
        r#"{
            "name": "ERP",
            "app_scope": {"name": "ERP"},
            "inventory_filters": [
                {"id": "f1", "name": "ERP"},
                {"id": "f2", "name": "Shared DNS"}
            ],
            "default_policies": [
                {
                    "consumer_filter_id": "f1",
                    "provider_filter_id": "f2",
                    "l4_params": [{"proto": 6, "port": [80, 80]}]
                }
            ]
        }"#,
    )
    .unwrap();

    let summary = run_main(&opts(&dir, &config, false)).unwrap();
    assert_eq!(summary.failed, 0);

    let dot = fs::read_to_string(dir.path().join("ERP-no-ports.dot")).unwrap();
    // Edge present, label omitted despite the rule's l4 params.
    assert!(dot.contains("f1 -> f2;"));
    assert!(!dot.contains("TCP"));
}

#[test]
fn missing_config_file_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("protocols.csv"), PROTOCOLS_CSV).unwrap();

    let missing = dir.path().join("nope.json");
    let err = run_main(&opts(&dir, &missing, true)).unwrap_err();
    assert_eq!(err.kind(), segviz_core::ErrorKind::FileNotFound);
}
