use std::cell::Cell;

/// External request to stop the frame loop.
///
/// Polled once per completed frame on the control thread, never while rows
/// are still being rendered.
pub trait QuitSignal {
    fn is_quit_requested(&self) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverQuit;

impl QuitSignal for NeverQuit {
    #[inline]
    fn is_quit_requested(&self) -> bool {
        false
    }
}

impl<F> QuitSignal for F
where
    F: Fn() -> bool,
{
    #[inline]
    fn is_quit_requested(&self) -> bool {
        self()
    }
}

/// Requests quit on the `frames`-th poll, i.e. after that many frames.
#[derive(Debug)]
pub struct FrameBudget {
    frames: u64,
    polled: Cell<u64>,
}

impl FrameBudget {
    #[must_use]
    pub fn new(frames: u64) -> Self {
        Self {
            frames,
            polled: Cell::new(0),
        }
    }

    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.frames.saturating_sub(self.polled.get())
    }
}

impl QuitSignal for FrameBudget {
    fn is_quit_requested(&self) -> bool {
        let polled = self.polled.get() + 1;
        self.polled.set(polled);

        polled >= self.frames
    }
}
