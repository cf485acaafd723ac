use crate::parser::SchemaContext;

type DeferredJob = Box<dyn FnOnce(&mut SchemaContext)>;

/// Resolution steps queued during the scan and run, in order, once every
/// declaration has been seen.
#[derive(Default)]
pub(crate) struct DeferredJobQueue {
    jobs: Vec<DeferredJob>,
}

impl DeferredJobQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, job: impl FnOnce(&mut SchemaContext) + 'static) {
        self.jobs.push(Box::new(job));
    }

    /// Runs every queued job against `context` in queue order.
    pub fn run(self, context: &mut SchemaContext) {
        log::debug!("running {} deferred job(s)", self.jobs.len());
        for job in self.jobs {
            job(context);
        }
    }
}

impl std::fmt::Debug for DeferredJobQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredJobQueue")
            .field("len", &self.jobs.len())
            .finish()
    }
}
