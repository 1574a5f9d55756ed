use std::cell::Cell;

/// Pins the calling thread to a fixed core, once per thread.
pub fn pin_thread_to_core() {
    let pin_core_id: usize = 2;

    thread_local! {static AFFINITY_ALREADY_SET: Cell<bool> = Cell::new(false); }

    if !AFFINITY_ALREADY_SET.with(|already_set| already_set.get()) {
        if let Some(core_id) = core_affinity::get_core_ids()
            .as_ref()
            .and_then(|ids| ids.get(pin_core_id))
        {
            core_affinity::set_for_current(*core_id);
        }

        AFFINITY_ALREADY_SET.with(|already_set| already_set.set(true));
    }
}
