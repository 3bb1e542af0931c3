use crate::swap_chain::FRAME_COUNT;

/// Fence-value bookkeeping for the double-buffered frame loop.
///
/// Each back buffer tracks the fence value its next submission will signal.
/// A buffer's command allocator may only be reset once the GPU has reached
/// the value signaled by that buffer's previous submission; keeping the
/// arithmetic here makes that discipline checkable without a device.
pub struct FramePacer {
    fence_values: [u64; FRAME_COUNT as usize],
}

impl FramePacer {
    pub fn new() -> Self {
        Self {
            fence_values: [1; FRAME_COUNT as usize],
        }
    }

    /// Fence value the submission for `buffer` should signal.
    pub fn signal_value(&self, buffer: usize) -> u64 {
        self.fence_values[buffer]
    }

    /// Records that `signaled` was queued and that `next` is about to be
    /// recorded into. Returns the fence value the GPU must have reached
    /// before `next`'s allocator may be reset.
    pub fn begin_frame(&mut self, next: usize, signaled: u64) -> u64 {
        let reuse_target = self.fence_values[next];
        self.fence_values[next] = signaled + 1;
        reuse_target
    }

    /// Full flush of `buffer`: returns the value to signal and wait for,
    /// e.g. to settle setup work before the first frame.
    pub fn flush(&mut self, buffer: usize) -> u64 {
        let value = self.fence_values[buffer];
        self.fence_values[buffer] += 1;
        value
    }

    /// Highest fence value any submission will signal; waiting for it drains
    /// the queue.
    pub fn last_scheduled(&self) -> u64 {
        self.fence_values.iter().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn flush_waits_for_the_value_it_schedules() {
        let mut pacer = FramePacer::new();
        let value = pacer.flush(0);
        assert_eq!(value, 1);
        // The next submission for that buffer signals a strictly later value.
        assert_eq!(pacer.signal_value(0), 2);
    }

    #[test]
    fn reuse_target_is_the_buffers_prior_signal() {
        let mut pacer = FramePacer::new();
        let mut last_signal: [Option<u64>; FRAME_COUNT as usize] = [None, None];
        let mut frame = 0usize;

        for _ in 0..100 {
            let signal = pacer.signal_value(frame);
            last_signal[frame] = Some(signal);

            // Flip-discard with two buffers alternates 0,1,0,1,...
            let next = 1 - frame;
            let reuse_target = pacer.begin_frame(next, signal);

            if let Some(prior) = last_signal[next] {
                assert_eq!(
                    reuse_target, prior,
                    "allocator reuse must wait for the buffer's prior submission"
                );
            }
            frame = next;
        }
    }

    #[test]
    fn signal_values_increase_monotonically() {
        let mut pacer = FramePacer::new();
        let mut frame = 0usize;
        let mut previous = 0;

        for _ in 0..10 {
            let signal = pacer.signal_value(frame);
            assert!(signal > previous);
            previous = signal;
            let next = 1 - frame;
            pacer.begin_frame(next, signal);
            frame = next;
        }
    }

    proptest! {
        // Even if the swap chain reports an unexpected buffer order, the
        // pacer must never ask to wait for a value nothing will signal.
        #[test]
        fn reuse_target_never_exceeds_the_queued_signal(
            buffers in proptest::collection::vec(0usize..FRAME_COUNT as usize, 1..200)
        ) {
            let mut pacer = FramePacer::new();
            let mut frame = 0usize;

            for next in buffers {
                let signal = pacer.signal_value(frame);
                let reuse_target = pacer.begin_frame(next, signal);
                prop_assert!(reuse_target <= signal);
                frame = next;
            }
        }
    }
}
