use chrono::{DateTime, Duration, Utc};

/// Virtual wall clock driving the debouncer.
///
/// The app refreshes it from `Utc::now()` once per frame; tests hold it still
/// and move it forward by hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Time {
    virt: DateTime<Utc>,
}

impl Time {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { virt: at }
    }

    pub fn now() -> Self {
        Self::new(Utc::now())
    }

    pub fn advance(&mut self, by: Duration) {
        self.virt += by;
    }
}

impl AsMut<DateTime<Utc>> for Time {
    fn as_mut(&mut self) -> &mut DateTime<Utc> {
        &mut self.virt
    }
}

impl AsRef<DateTime<Utc>> for Time {
    fn as_ref(&self) -> &DateTime<Utc> {
        &self.virt
    }
}
