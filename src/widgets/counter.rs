#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub display: i64,
    pub done: bool,
}

// The running value may pass the target on a non-integer increment; the
// display is then pinned to the target.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: i64,
    increment: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: i64, steps: u32) -> Self {
        let steps = steps.max(1);
        Self {
            target,
            increment: target as f64 / f64::from(steps),
            current: 0.0,
            done: false,
        }
    }

    pub fn step(&mut self) -> CounterFrame {
        if self.done {
            return CounterFrame {
                display: self.target,
                done: true,
            };
        }

        if self.current < self.target as f64 {
            self.current += self.increment;
            if self.current < self.target as f64 {
                return CounterFrame {
                    display: self.current.ceil() as i64,
                    done: false,
                };
            }
        }

        self.done = true;
        CounterFrame {
            display: self.target,
            done: true,
        }
    }
}

pub fn parse_target(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
