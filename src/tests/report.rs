use super::{Probe, Report};
use crate::formats::markdown::MarkdownFormat;
use crate::page::Page;

const THREE_SECTIONS: &str = "# Home\n\n\n\n# Services\n\n\n\n# Contact\n";

#[test]
fn test_probes_accumulate_in_order() {
    // Headings on lines 0, 4 and 8 with a line height of 200 sit at 0, 800 and 1600.
    let mut page = Page::from_source(THREE_SECTIONS, "site.md", &MarkdownFormat, 200).unwrap();

    let report = Report::run("site.md", &mut page, &[-200, 750, 1600, -200]);

    assert_eq!(report.file, "site.md");
    let active: Vec<Vec<String>> = report.probes.iter().map(|p| p.active.clone()).collect();
    assert_eq!(
        active,
        vec![
            Vec::<String>::new(),
            vec!["#services".to_string()],
            vec!["#contact".to_string()],
            // Nothing reached: the earlier marker stays.
            vec!["#contact".to_string()],
        ]
    );
}

#[test]
fn test_report_serialises_to_json() {
    let report = Report {
        file: "site.md".to_string(),
        probes: vec![Probe {
            scroll_top: 750,
            active: vec!["#services".to_string()],
        }],
    };

    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "file": "site.md",
            "probes": [{"scroll_top": 750, "active": ["#services"]}]
        })
    );
}

#[test]
fn test_to_json_is_pretty_printed() {
    let report = Report {
        file: "site.md".to_string(),
        probes: Vec::new(),
    };

    let json = report.to_json().unwrap();

    assert!(json.contains('\n'));
    let parsed: Report = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.file, "site.md");
    assert!(parsed.probes.is_empty());
}
