use std::sync::mpsc;

/// Delivers process interrupt and termination requests.
pub trait InterruptSource: Send + 'static {
    /// Blocks the calling thread until an interrupt arrives.
    fn wait(&self);
}

/// Interrupts raised by Ctrl-C (SIGINT) and SIGTERM.
pub struct CtrlC {
    channel: mpsc::Receiver<()>,
}

impl CtrlC {
    /// Installs the process-wide handler. Can only succeed once per process.
    pub fn install() -> Result<Self, ctrlc::Error> {
        let (tx, rx) = mpsc::sync_channel(1);
        ctrlc::set_handler(move || {
            tx.try_send(()).ok();
        })?;
        Ok(Self { channel: rx })
    }
}

impl InterruptSource for CtrlC {
    fn wait(&self) {
        self.channel.recv().ok();
    }
}
