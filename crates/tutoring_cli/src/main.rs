//! CLI probe over the seeded meeting store.
//!
//! # Responsibility
//! - Verify `tutoring_core` linkage and seed decoding from a shell.
//! - Print a deterministic meeting overview for quick sanity checks.

use std::process::ExitCode;
use tutoring_core::{
    core_version, CoreSettings, InMemoryMeetingRepository, Meeting, MeetingService,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tutoring_cli: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = CoreSettings::from_env()?;
    if settings.init_logging()? {
        log::info!("event=cli_start module=cli status=ok");
    }

    let repo = InMemoryMeetingRepository::seeded()?;
    let service = MeetingService::new(repo);

    println!("tutoring_core version={}", core_version());
    println!("meetings={}", service.list_meetings().len());
    for meeting in service.list_meetings() {
        println!("{}", overview_line(meeting));
    }

    let pending = service.meetings_needing_records();
    println!("needing_records={}", pending.len());
    for meeting in pending {
        println!("  {} {}", meeting.id, meeting.attendance_summary());
    }
    Ok(())
}

fn overview_line(meeting: &Meeting) -> String {
    format!(
        "{} {} {}-{} {} {} [{}]",
        meeting.id,
        meeting.date.format("%b %-d, %Y"),
        meeting.start_time.format("%H:%M"),
        meeting.end_time.format("%H:%M"),
        meeting.course_code,
        meeting.course_name,
        if meeting.has_record() {
            "Recorded"
        } else {
            "No Record"
        }
    )
}
