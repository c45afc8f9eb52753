/// Interval between counter frames, roughly 60 per second.
pub const TICK_MS: u32 = 16;
pub const DEFAULT_DURATION_MS: u32 = 2000;

/// Counts a displayed integer up from zero to `target` in fixed increments.
///
/// Each call to [`CounterAnimation::tick`] corresponds to one interval
/// firing. The last frame is always exactly the target.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: u32) -> Self {
        let steps = (f64::from(duration_ms) / f64::from(TICK_MS)).max(1.0);
        Self {
            target,
            increment: target as f64 / steps,
            current: 0.0,
            done: false,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance one tick and return the text to display, or `None` once the
    /// target has been shown.
    pub fn tick(&mut self) -> Option<String> {
        if self.done {
            return None;
        }

        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.done = true;
            Some(format_thousands(self.target))
        } else {
            Some(format_thousands(self.current.floor() as u64))
        }
    }
}

impl Iterator for CounterAnimation {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.tick()
    }
}

/// `12500` -> `"12,500"`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
