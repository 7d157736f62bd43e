//! Service worker registration seam.

pub trait WorkerRegistrar {
    /// Whether the environment exposes worker registration at all.
    fn is_supported(&self) -> bool;

    /// Issue the registration request. Fire-and-forget: the outcome is at most logged.
    fn register(&self, path: &str);
}

impl<W: WorkerRegistrar + ?Sized> WorkerRegistrar for &W {
    fn is_supported(&self) -> bool {
        (**self).is_supported()
    }

    fn register(&self, path: &str) {
        (**self).register(path)
    }
}

/// Environment without service workers (native builds).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoWorkers;

impl WorkerRegistrar for NoWorkers {
    fn is_supported(&self) -> bool {
        false
    }

    fn register(&self, _path: &str) {}
}
