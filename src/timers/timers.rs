use std::io::Write;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct InnerTimer {
    start: Option<Instant>,
    elapsed: Duration,
    subtimers: SubTimers,
}

impl InnerTimer {
    fn start(&mut self) {
        self.start = Some(Instant::now());
    }

    fn stop(&mut self) {
        if let Some(instant) = self.start.take() {
            self.elapsed += instant.elapsed();
        }
    }
}

// phases are kept in first-start order so printing is stable
#[derive(Debug, Default)]
struct SubTimers(Vec<(&'static str, InnerTimer)>);

impl SubTimers {
    fn get_mut(&mut self, key: &'static str) -> Option<&mut InnerTimer> {
        self.0.iter_mut().find(|(k, _)| *k == key).map(|(_, t)| t)
    }

    fn get(&self, key: &'static str) -> Option<&InnerTimer> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, t)| t)
    }

    fn start_subtimer(&mut self, key: &'static str) {
        if self.get(key).is_none() {
            self.0.push((key, InnerTimer::default()));
        }
        if let Some(t) = self.get_mut(key) {
            t.start();
        }
    }

    fn total_time(&self) -> Duration {
        self.0
            .iter()
            .fold(Duration::ZERO, |acc, (_, t)| acc + t.elapsed)
    }

    fn print(&self, out: &mut dyn Write, depth: usize) -> std::io::Result<()> {
        for (key, val) in self.0.iter() {
            let tabs = format!("{: <1$}", "", 4 * depth);
            writeln!(out, "{}{:} : {:?}", tabs, *key, val.elapsed)?;
            val.subtimers.print(out, depth + 1)?;
        }
        Ok(())
    }
}

/// Stack of named, possibly nested, timers.
#[derive(Default, Debug)]
pub(crate) struct Timers {
    stack: Vec<&'static str>,
    subtimers: SubTimers,
}

impl Timers {
    fn mut_active_timer(&mut self) -> Option<&mut InnerTimer> {
        let (first, rest) = self.stack.split_first()?;
        let mut active_timer = self.subtimers.get_mut(first)?;
        for key in rest {
            active_timer = active_timer.subtimers.get_mut(key)?;
        }
        Some(active_timer)
    }

    /// starts a timer with name `key` as a child of the current timer
    pub fn start_as_current(&mut self, key: &'static str) {
        if let Some(active) = self.mut_active_timer() {
            active.subtimers.start_subtimer(key);
        } else {
            self.subtimers.start_subtimer(key);
        }
        self.stack.push(key);
    }

    /// stops the current timer
    pub fn stop_current(&mut self) {
        if let Some(active) = self.mut_active_timer() {
            active.stop();
        }
        self.stack.pop();
    }

    /// elapsed time of a top level phase
    pub fn elapsed(&self, key: &'static str) -> Duration {
        self.subtimers
            .get(key)
            .map_or(Duration::ZERO, |t| t.elapsed)
    }

    pub fn total_time(&self) -> Duration {
        self.subtimers.total_time()
    }

    pub fn print(&self, out: &mut dyn Write) -> std::io::Result<()> {
        self.subtimers.print(out, 0)
    }
}

macro_rules! timeit {
    ($timer:ident => $key:literal; $($tt:tt)+) => {

        $timer.start_as_current($key);
        $(
            $tt
        )+
        $timer.stop_current();
    }
}
pub(crate) use timeit;
