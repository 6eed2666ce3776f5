// tests/support/mocks/util.rs
use std::collections::VecDeque;
use std::sync::Mutex;

use resdev_core::application::ports::util::SuffixGenerator;

/// Hands out the given suffixes in order, then repeats the last one.
pub struct ScriptedSuffix {
    queue: Mutex<VecDeque<String>>,
    last: Mutex<String>,
}

impl ScriptedSuffix {
    pub fn new(suffixes: &[&str]) -> Self {
        Self {
            queue: Mutex::new(suffixes.iter().map(|s| (*s).to_string()).collect()),
            last: Mutex::new("a0a0a0a".into()),
        }
    }
}

impl SuffixGenerator for ScriptedSuffix {
    fn random_suffix(&self, len: usize) -> String {
        let next = self.queue.lock().unwrap().pop_front();
        let mut last = self.last.lock().unwrap();
        if let Some(next) = next {
            *last = next;
        }
        last.chars().take(len).collect()
    }
}

pub struct FixedSuffix(pub &'static str);

impl SuffixGenerator for FixedSuffix {
    fn random_suffix(&self, len: usize) -> String {
        self.0.chars().take(len).collect()
    }
}
