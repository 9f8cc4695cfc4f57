use crate::{
    error::DeviceError,
    interrupt::InterruptSource,
    sink::{AudioSink, StreamParams},
};
use std::{
    sync::mpsc,
    thread::{self, JoinHandle},
    time::Duration,
};

/// Requests a graceful stop of the write loop.
#[derive(Clone)]
pub struct StopHandle {
    channel: mpsc::SyncSender<()>,
}

impl StopHandle {
    /// Signals the write loop to stop at its next iteration boundary.
    /// Never blocks, and does nothing if a stop is already pending or the loop is gone.
    pub fn stop(&self) {
        self.channel.try_send(()).ok();
    }
}

/// Receiving end of a one-shot stop notification.
pub struct StopSignal {
    channel: mpsc::Receiver<()>,
    stopped: bool,
}

impl StopSignal {
    /// Returns `true` once a stop has been requested. Dropping every handle does not count as a stop.
    pub fn is_stopped(&mut self) -> bool {
        if !self.stopped {
            self.stopped = self.channel.try_recv().is_ok();
        }
        self.stopped
    }
}

/// Creates a connected stop handle and signal.
pub fn stop_channel() -> (StopHandle, StopSignal) {
    let (tx, rx) = mpsc::sync_channel(1);
    (
        StopHandle { channel: tx },
        StopSignal {
            channel: rx,
            stopped: false,
        },
    )
}

/// Spawns a one-shot timer that requests a stop after `duration` has elapsed.
pub fn spawn_timer(duration: Duration, handle: StopHandle) -> JoinHandle<()> {
    thread::spawn(move || {
        thread::sleep(duration);
        handle.stop();
    })
}

/// Spawns a thread that waits for an interrupt and then runs `on_interrupt`.
///
/// Unlike a duration stop, an interrupt does not wait for the write loop: the
/// binary passes a callback that exits the process right away, skipping any
/// in-flight write and the sink teardown.
pub fn spawn_interrupt_watcher<I, F>(source: I, on_interrupt: F) -> JoinHandle<()>
where
    I: InterruptSource,
    F: FnOnce() + Send + 'static,
{
    thread::spawn(move || {
        source.wait();
        on_interrupt();
    })
}

/// Loops a fixed buffer of samples into an audio sink until told to stop.
pub struct StreamingEngine {
    params: StreamParams,
}

impl StreamingEngine {
    pub fn new(params: StreamParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> StreamParams {
        self.params
    }

    /// Plays `buffer` on repeat until `stop` fires, and returns the number of completed writes.
    ///
    /// The stop signal is only checked between writes, so an in-flight write always
    /// completes. Whatever ends the loop, the sink is released in reverse order of
    /// acquisition: stop, close, terminate.
    pub fn run<S: AudioSink + ?Sized>(
        &self,
        buffer: &[f32],
        sink: &mut S,
        stop: &mut StopSignal,
    ) -> Result<usize, DeviceError> {
        assert!(buffer.len() == self.params.buffer_size);

        sink.initialize()?;
        if let Err(err) = sink.open_stream(self.params) {
            return Err(first_error(err, sink.terminate()));
        }
        if let Err(err) = sink.start() {
            let cleanup = sink.close().and(sink.terminate());
            return Err(first_error(err, cleanup));
        }

        let result = self.write_loop(buffer, sink, stop);

        let cleanup = sink.stop().and(sink.close()).and(sink.terminate());
        match result {
            Ok(writes) => cleanup.map(|_| writes),
            Err(err) => Err(first_error(err, cleanup)),
        }
    }

    fn write_loop<S: AudioSink + ?Sized>(
        &self,
        buffer: &[f32],
        sink: &mut S,
        stop: &mut StopSignal,
    ) -> Result<usize, DeviceError> {
        let mut writes = 0;
        while !stop.is_stopped() {
            sink.buffer_mut().copy_from_slice(buffer);
            sink.write()?;
            writes += 1;
        }
        Ok(writes)
    }
}

fn first_error(err: DeviceError, cleanup: Result<(), DeviceError>) -> DeviceError {
    if let Err(cleanup_err) = cleanup {
        eprintln!("Error while releasing audio device: {}", cleanup_err);
    }
    err
}
