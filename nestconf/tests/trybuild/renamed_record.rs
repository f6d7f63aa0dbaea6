//! Trybuild fixture verifying `#[nestconf(rename = "...")]` names the
//! generated record.

use nestconf::{Configurable, HasConfig, Kwargs, RecordType};

/// Learning-rate schedule.
#[derive(Debug, Configurable)]
#[nestconf(rename = "Schedule")]
struct Scheduler {
    /// Warm-up steps.
    warmup: Option<u32>,
    #[nestconf(default_factory = Vec::new)]
    milestones: Option<Vec<u32>>,
}

fn main() {
    let record: Schedule = Schedule::default();
    let _: &'static str = <Schedule as RecordType>::NAME;
    let built = Scheduler::construct(Some(record), Kwargs::new());
    let _ = built.map(|scheduler| scheduler.config());
}
