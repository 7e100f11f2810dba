use crate::build::build_record;
use crate::context::LintViolation;
use classguard_types::DiagnosticRecord;
use std::sync::Mutex;

/// The host's event-emission facility.
///
/// Emission is fire-and-forget: the record may be silently dropped when the
/// surrounding build/processing context has already ended. Callers must not
/// depend on acknowledgement or side effects.
pub trait DiagnosticEmitter {
    fn emit_if_current(&self, record: DiagnosticRecord);
}

/// Build and emit one record per violation, in order.
pub fn broadcast<E>(emitter: &E, violations: &[LintViolation])
where
    E: DiagnosticEmitter + ?Sized,
{
    for violation in violations {
        emitter.emit_if_current(build_record(violation));
    }
}

/// In-memory emitter buffering everything it receives. Used by tests and by
/// hosts that batch records themselves.
#[derive(Debug, Default)]
pub struct RecordingEmitter {
    records: Mutex<Vec<DiagnosticRecord>>,
}

impl RecordingEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_records(&self) -> Vec<DiagnosticRecord> {
        match self.records.lock() {
            Ok(mut records) => std::mem::take(&mut *records),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl DiagnosticEmitter for RecordingEmitter {
    fn emit_if_current(&self, record: DiagnosticRecord) {
        if let Ok(mut records) = self.records.lock() {
            records.push(record);
        }
    }
}
