use huddle_domain::ID;
use std::sync::Mutex;

/// Deferred-job queue for scheduled notification deliveries. The scheduler
/// enqueues a `PushNotification` id with the instant it should fire at; a
/// worker loop polls `take_due` and executes the deliveries. Deleting an
/// occurrence cancels its pending jobs, and the delivery path additionally
/// tolerates records that are gone by the time a job fires.
#[async_trait::async_trait]
pub trait IJobQueue: Send + Sync {
    async fn enqueue_at(&self, job_id: &ID, fire_at: i64);
    async fn cancel(&self, job_id: &ID);
    /// Removes and returns all job ids due at or before `now`
    async fn take_due(&self, now: i64) -> Vec<ID>;
}

pub struct InMemoryJobQueue {
    jobs: Mutex<Vec<(ID, i64)>>,
}

impl InMemoryJobQueue {
    pub fn new() -> Self {
        Self {
            jobs: Mutex::new(Vec::new()),
        }
    }

    pub fn pending_count(&self) -> usize {
        self.jobs.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl IJobQueue for InMemoryJobQueue {
    async fn enqueue_at(&self, job_id: &ID, fire_at: i64) {
        let mut jobs = self.jobs.lock().unwrap();
        jobs.push((job_id.clone(), fire_at));
    }

    async fn cancel(&self, job_id: &ID) {
        let mut jobs = self.jobs.lock().unwrap();
        jobs.retain(|(id, _)| id != job_id);
    }

    async fn take_due(&self, now: i64) -> Vec<ID> {
        let mut jobs = self.jobs.lock().unwrap();
        let mut due = Vec::new();
        for i in (0..jobs.len()).rev() {
            if jobs[i].1 <= now {
                due.push(jobs.remove(i).0);
            }
        }
        due.reverse();
        due
    }
}
