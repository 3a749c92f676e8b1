//! CPU affinity helpers for steadier timings.
//!
//! Pinning the benchmark thread to one core keeps the scheduler from
//! migrating it in the middle of a measured round. Pinning is best-effort:
//! when the platform refuses, measurements simply run unpinned.
//!
//! Linux uses `sched_setaffinity` through libc. Other platforms only report
//! the core count and never pin.

use std::sync::atomic::{AtomicBool, Ordering};

// ============================================================================
// Linux implementation using libc
// ============================================================================

#[cfg(target_os = "linux")]
mod platform {
    use std::cell::RefCell;

    thread_local! {
        static ORIGINAL_AFFINITY: RefCell<Option<libc::cpu_set_t>> = const { RefCell::new(None) };
    }

    /// Number of online CPU cores
    pub fn core_count() -> Option<usize> {
        let num_cpus = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) };
        (num_cpus > 0).then_some(num_cpus as usize)
    }

    /// Core the calling thread is running on
    pub fn current_cpu() -> Option<usize> {
        let cpu = unsafe { libc::sched_getcpu() };
        (cpu >= 0).then_some(cpu as usize)
    }

    /// Remember the current affinity mask so it can be restored
    pub fn save_affinity() -> bool {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            if libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set) != 0 {
                return false;
            }
            ORIGINAL_AFFINITY.with(|cell| *cell.borrow_mut() = Some(set));
            true
        }
    }

    pub fn set_affinity(core_id: usize) -> bool {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    pub fn restore_affinity() -> bool {
        ORIGINAL_AFFINITY.with(|cell| match cell.borrow_mut().take() {
            Some(set) => unsafe {
                libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
            },
            None => false,
        })
    }
}

// ============================================================================
// Everything else: report cores, never pin
// ============================================================================

#[cfg(not(target_os = "linux"))]
mod platform {
    pub fn core_count() -> Option<usize> {
        std::thread::available_parallelism().ok().map(|n| n.get())
    }
    pub fn current_cpu() -> Option<usize> {
        None
    }
    pub fn save_affinity() -> bool {
        true
    }
    pub fn set_affinity(_core_id: usize) -> bool {
        false
    }
    pub fn restore_affinity() -> bool {
        true
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Number of online CPU cores, as printed in the report header
pub fn core_count() -> Option<usize> {
    platform::core_count()
}

/// Pin the current thread to the core it is currently running on.
///
/// Saves the current affinity first so [`unpin`] can restore it.
///
/// # Returns
/// The core ID that was pinned to, or `None` if pinning failed.
pub fn pin_to_current_core() -> Option<usize> {
    let core = platform::current_cpu().unwrap_or(0);
    if !platform::save_affinity() {
        return None;
    }
    platform::set_affinity(core).then_some(core)
}

/// Unpin the current thread, restoring its original CPU affinity.
pub fn unpin() -> bool {
    platform::restore_affinity()
}

// ============================================================================
// RAII Guard
// ============================================================================

static PIN_FAILURE_REPORTED: AtomicBool = AtomicBool::new(false);

/// Pins on creation, unpins on drop.
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
}

impl CpuPinGuard {
    /// Create a new guard that pins to the current CPU core.
    pub fn new() -> Self {
        let pinned_core = pin_to_current_core();
        if pinned_core.is_none() && !PIN_FAILURE_REPORTED.swap(true, Ordering::Relaxed) {
            tracing::warn!("cpu pinning unavailable, measuring unpinned");
        }
        Self { pinned_core }
    }

    /// Get the core ID this thread is pinned to, if any.
    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned_core.is_some() {
            unpin();
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}
