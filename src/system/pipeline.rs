//! Frame feed: a producer thread pulling detections from a source and a
//! bounded channel toward the processing loop.
//!
//! Classification is stateless per frame, so backpressure is handled by
//! dropping: when the consumer falls behind and the channel is full, the
//! producer discards the frame instead of blocking the capture rate.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, TrySendError, bounded};
use tracing::debug;

use super::messages::DetectionSet;

/// Capacity of the detection channel between the producer and the
/// processing loop. A full channel drops the incoming frame.
const DETECTION_CHANNEL_CAPACITY: usize = 5;

/// Anything that yields per-frame detection sets: a live detector bridge
/// or a recorded session replay. `None` means the source is exhausted.
pub trait FrameSource: Send {
    fn next_detections(&mut self) -> Option<DetectionSet>;
}

/// Producer thread plus the receiving end of the detection channel.
pub struct GesturePipeline {
    receiver: Receiver<DetectionSet>,
    shutdown: Arc<AtomicBool>,
    dropped: Arc<AtomicUsize>,
    producer: Option<JoinHandle<()>>,
}

impl GesturePipeline {
    /// Spawn the producer thread over the given source.
    pub fn spawn<S: FrameSource + 'static>(mut source: S) -> Self {
        let (sender, receiver) = bounded::<DetectionSet>(DETECTION_CHANNEL_CAPACITY);
        let shutdown = Arc::new(AtomicBool::new(false));
        let dropped = Arc::new(AtomicUsize::new(0));

        let producer_shutdown = shutdown.clone();
        let producer_dropped = dropped.clone();
        let producer = thread::spawn(move || {
            while !producer_shutdown.load(Ordering::SeqCst) {
                let Some(set) = source.next_detections() else {
                    break;
                };
                match sender.try_send(set) {
                    Ok(()) => {}
                    Err(TrySendError::Full(set)) => {
                        producer_dropped.fetch_add(1, Ordering::SeqCst);
                        debug!(
                            "Dropping frame {}: consumer behind capture rate",
                            set.frame_index
                        );
                    }
                    Err(TrySendError::Disconnected(_)) => break,
                }
            }
        });

        Self {
            receiver,
            shutdown,
            dropped,
            producer: Some(producer),
        }
    }

    /// Receive the next detection set, or `None` once the source is
    /// exhausted and the channel drained.
    pub fn recv(&self) -> Option<DetectionSet> {
        self.receiver.recv().ok()
    }

    /// Frames discarded because the consumer was behind.
    pub fn dropped_frames(&self) -> usize {
        self.dropped.load(Ordering::SeqCst)
    }

    /// Signal the producer to stop and wait for it.
    pub fn shutdown(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        if let Some(handle) = self.producer.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for GesturePipeline {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Source backed by a fixed list of frames.
    struct VecSource {
        frames: Vec<DetectionSet>,
        cursor: usize,
    }

    impl FrameSource for VecSource {
        fn next_detections(&mut self) -> Option<DetectionSet> {
            let set = self.frames.get(self.cursor).cloned();
            self.cursor += 1;
            set
        }
    }

    #[test]
    fn test_pipeline_delivers_frames_in_order_and_terminates() {
        // Three frames fit the channel capacity, so none can be dropped.
        let frames: Vec<DetectionSet> = (0..3)
            .map(|frame_index| DetectionSet {
                frame_index,
                hands: Vec::new(),
            })
            .collect();
        let pipeline = GesturePipeline::spawn(VecSource { frames, cursor: 0 });

        let mut received = Vec::new();
        while let Some(set) = pipeline.recv() {
            received.push(set.frame_index);
        }

        assert_eq!(received, vec![0, 1, 2]);
        assert_eq!(pipeline.dropped_frames(), 0);
    }
}
