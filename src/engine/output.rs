/// One turn's worth of renderable output. Exit labels travel as data, in
/// declaration order; shells decide how to format them.
#[derive(Debug, Clone)]
pub enum OutputBlock {
    /// Room name.
    Heading(String),
    /// Descriptions and listings.
    Prose(String),
    /// Transition announcements: pickups, win/lose text, restarts.
    Event(String),
    /// Exit labels from the current room. Empty means a dead end and the
    /// shell prints its own sentinel.
    ExitList(Vec<String>),
}

#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heading(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Heading(s));
        }
    }

    pub fn prose(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Prose(s));
        }
    }

    pub fn event(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Event(s));
        }
    }

    /// Pushed once per room render, even when empty.
    pub fn exit_list(&mut self, labels: Vec<String>) {
        self.blocks.push(OutputBlock::ExitList(labels));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_dropped() {
        let mut out = Output::new();
        out.heading("   ");
        out.prose("");
        out.event("\n");
        assert!(out.blocks.is_empty());
    }

    #[test]
    fn empty_exit_list_is_kept_for_the_dead_end_sentinel() {
        let mut out = Output::new();
        out.exit_list(Vec::new());
        assert!(matches!(out.blocks.as_slice(), [OutputBlock::ExitList(labels)] if labels.is_empty()));
    }
}
