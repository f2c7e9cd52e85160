// src/runner.rs
//
// Several game ids at once: a small scoped worker pool, each worker running
// the ordinary sequential pipeline. Results come back in request order.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    mpsc,
};
use std::thread;

use crate::config::consts::WORKERS;
use crate::core::PageSource;
use crate::engine::RosterService;
use crate::progress::Progress;
use crate::roster::Roster;

pub fn collect_all<S>(
    service: &RosterService<S>,
    ids: &[String],
    mut progress: Option<&mut dyn Progress>,
) -> Vec<(String, Roster)>
where
    S: PageSource + Sync,
{
    if let Some(p) = progress.as_deref_mut() {
        p.begin(ids.len());
    }

    let counter = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<(usize, Roster)>();
    let workers = WORKERS.min(ids.len()).max(1);

    let mut out: Vec<(usize, Roster)> = Vec::with_capacity(ids.len());

    thread::scope(|scope| {
        for _ in 0..workers {
            let tx = tx.clone();
            let counter = &counter;
            scope.spawn(move || {
                loop {
                    let i = counter.fetch_add(1, Ordering::Relaxed);
                    if i >= ids.len() {
                        break;
                    }
                    let roster = service.current_roster(&ids[i]);
                    if tx.send((i, roster)).is_err() {
                        break;
                    }
                }
            });
        }
        drop(tx); // main thread is sole receiver now

        for (i, roster) in rx.iter() {
            if let Some(p) = progress.as_deref_mut() {
                if roster.is_empty() {
                    p.item_empty(&ids[i]);
                } else {
                    p.item_done(&ids[i], roster.len());
                }
            }
            out.push((i, roster));
        }
    });

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    out.sort_by_key(|(i, _)| *i);
    out.into_iter().map(|(i, roster)| (ids[i].clone(), roster)).collect()
}
