use std::fs;

use tempfile::tempdir;

use sylva_lib::report::{latest_report, LATEST_REPORT_FILENAME};
use sylva_lib::{stage_latest_report, StageOutcome};

#[test]
fn stages_newest_dated_report() -> sylva_lib::Result<()> {
    let root = tempdir()?;
    let reports = root.path().join("reports/daily");
    let staging = root.path().join("Netlify/data");
    fs::create_dir_all(&reports)?;

    fs::write(reports.join("sylva_briefing_2025-06-30_Attica.json"), "{\"day\":30}")?;
    fs::write(reports.join("sylva_briefing_2025-07-01_Attica.json"), "{\"day\":1}")?;
    fs::write(reports.join("sylva_briefing_2025-07-02_Attica.txt"), "text")?;
    fs::write(reports.join("zz_report_template.json"), "{}")?;

    let outcome = stage_latest_report(&reports, &staging)?;

    let expected_source = reports.join("sylva_briefing_2025-07-01_Attica.json");
    let expected_destination = staging.join(LATEST_REPORT_FILENAME);
    assert_eq!(
        outcome,
        StageOutcome::Copied {
            source: expected_source,
            destination: expected_destination.clone(),
        }
    );
    assert_eq!(fs::read_to_string(expected_destination)?, "{\"day\":1}");
    Ok(())
}

#[test]
fn overwrites_previously_staged_report() -> sylva_lib::Result<()> {
    let root = tempdir()?;
    let reports = root.path().join("reports");
    let staging = root.path().join("staging");
    fs::create_dir_all(&reports)?;
    fs::create_dir_all(&staging)?;
    fs::write(staging.join(LATEST_REPORT_FILENAME), "stale")?;
    fs::write(reports.join("2025-07-03.json"), "fresh")?;

    stage_latest_report(&reports, &staging)?;
    assert_eq!(
        fs::read_to_string(staging.join(LATEST_REPORT_FILENAME))?,
        "fresh"
    );
    Ok(())
}

#[test]
fn only_templates_is_a_no_op() -> sylva_lib::Result<()> {
    let root = tempdir()?;
    let reports = root.path().join("reports");
    let staging = root.path().join("staging");
    fs::create_dir_all(&reports)?;
    fs::write(reports.join("template.json"), "{}")?;

    assert_eq!(stage_latest_report(&reports, &staging)?, StageOutcome::NoReports);
    assert!(staging.is_dir(), "staging directory is created regardless");
    assert!(!staging.join(LATEST_REPORT_FILENAME).exists());
    Ok(())
}

#[test]
fn missing_reports_dir_is_a_no_op() -> sylva_lib::Result<()> {
    let root = tempdir()?;
    let reports = root.path().join("does-not-exist");
    let staging = root.path().join("staging");

    let outcome = stage_latest_report(&reports, &staging)?;
    assert_eq!(
        outcome,
        StageOutcome::MissingReportsDir {
            path: reports.clone()
        }
    );
    assert!(!staging.join(LATEST_REPORT_FILENAME).exists());
    Ok(())
}

#[test]
fn directories_named_like_reports_are_ignored() -> sylva_lib::Result<()> {
    let root = tempdir()?;
    fs::create_dir_all(root.path().join("2099-01-01.json"))?;
    fs::write(root.path().join("2025-01-01.json"), "{}")?;

    let latest = latest_report(root.path())?;
    assert_eq!(latest, Some(root.path().join("2025-01-01.json")));
    Ok(())
}
