use std::cell::RefCell;

use canvas_rs::scheduler::{
    FrameHandle, FrameQueue, FrameRequester, FrameStatus, RenderScheduler, ScheduleOutcome,
};

fn tick(scheduler: &mut RenderScheduler<u32>, frames: &mut FrameQueue, drawn: &RefCell<Vec<u32>>) {
    for handle in frames.take_ready() {
        scheduler.run_frame(handle, |dependencies| {
            drawn.borrow_mut().push(*dependencies);
            FrameStatus::Drawn
        });
    }
}

#[test]
fn rapid_reschedules_run_one_frame_with_latest_dependencies() {
    let mut scheduler = RenderScheduler::new();
    let mut frames = FrameQueue::new();
    let drawn = RefCell::new(Vec::new());

    assert!(matches!(
        scheduler.schedule(1, &mut frames),
        ScheduleOutcome::Scheduled(_)
    ));
    assert!(matches!(
        scheduler.schedule(2, &mut frames),
        ScheduleOutcome::Scheduled(_)
    ));
    assert_eq!(frames.pending_count(), 1);
    assert_eq!(frames.cancelled_total(), 1);

    tick(&mut scheduler, &mut frames, &drawn);

    assert_eq!(*drawn.borrow(), vec![2]);
    assert_eq!(scheduler.frames_drawn(), 1);
    assert_eq!(scheduler.generation(), 2);
}

#[test]
fn same_dependencies_coalesce_then_stay_unchanged() {
    let mut scheduler = RenderScheduler::new();
    let mut frames = FrameQueue::new();
    let drawn = RefCell::new(Vec::new());

    scheduler.schedule(7, &mut frames);
    assert_eq!(scheduler.schedule(7, &mut frames), ScheduleOutcome::Coalesced);
    tick(&mut scheduler, &mut frames, &drawn);
    assert_eq!(scheduler.schedule(7, &mut frames), ScheduleOutcome::Unchanged);

    tick(&mut scheduler, &mut frames, &drawn);
    assert_eq!(*drawn.borrow(), vec![7]);
    assert_eq!(frames.requested_total(), 1);
}

#[test]
fn pausing_cancels_pending_frame_and_blocks_new_ones() {
    let mut scheduler = RenderScheduler::new();
    let mut frames = FrameQueue::new();
    let drawn = RefCell::new(Vec::new());

    scheduler.schedule(1, &mut frames);
    scheduler.set_paused(true, &mut frames);
    assert_eq!(frames.pending_count(), 0);
    assert_eq!(scheduler.pending_frame(), None);

    assert_eq!(scheduler.schedule(2, &mut frames), ScheduleOutcome::Paused);
    assert_eq!(scheduler.invalidate(&mut frames), ScheduleOutcome::Paused);
    tick(&mut scheduler, &mut frames, &drawn);
    assert!(drawn.borrow().is_empty());

    scheduler.set_paused(false, &mut frames);
    tick(&mut scheduler, &mut frames, &drawn);
    assert_eq!(*drawn.borrow(), vec![2]);
}

#[test]
fn resuming_without_changes_does_not_redraw() {
    let mut scheduler = RenderScheduler::new();
    let mut frames = FrameQueue::new();
    let drawn = RefCell::new(Vec::new());

    scheduler.schedule(3, &mut frames);
    tick(&mut scheduler, &mut frames, &drawn);
    scheduler.set_paused(true, &mut frames);
    scheduler.set_paused(false, &mut frames);

    assert_eq!(frames.pending_count(), 0);
    assert!(!scheduler.is_paused());
}

#[test]
fn superseded_handle_never_draws() {
    let mut scheduler = RenderScheduler::new();
    let mut frames = FrameQueue::new();

    let ScheduleOutcome::Scheduled(first) = scheduler.schedule(1, &mut frames) else {
        panic!("first request should schedule");
    };
    scheduler.schedule(2, &mut frames);

    let ran = scheduler.run_frame(first, |_| panic!("stale frame must not draw"));
    assert!(!ran);
    assert!(!frames.is_pending(first));
}

#[test]
fn unknown_handle_is_ignored() {
    let mut scheduler: RenderScheduler<u32> = RenderScheduler::new();
    let ran = scheduler.run_frame(FrameHandle::from_raw(99), |_| FrameStatus::Drawn);
    assert!(!ran);
    assert_eq!(scheduler.frames_drawn(), 0);
}

#[test]
fn skipped_frame_is_retried_on_next_request() {
    let mut scheduler = RenderScheduler::new();
    let mut frames = FrameQueue::new();

    scheduler.schedule(5, &mut frames);
    for handle in frames.take_ready() {
        assert!(!scheduler.run_frame(handle, |_| FrameStatus::Skipped));
    }

    assert!(matches!(
        scheduler.schedule(5, &mut frames),
        ScheduleOutcome::Scheduled(_)
    ));
}

#[test]
fn invalidate_redraws_latest_dependencies() {
    let mut scheduler = RenderScheduler::new();
    let mut frames = FrameQueue::new();
    let drawn = RefCell::new(Vec::new());

    assert_eq!(scheduler.invalidate(&mut frames), ScheduleOutcome::Unchanged);

    scheduler.schedule(4, &mut frames);
    assert_eq!(scheduler.invalidate(&mut frames), ScheduleOutcome::Coalesced);
    tick(&mut scheduler, &mut frames, &drawn);

    assert!(matches!(
        scheduler.invalidate(&mut frames),
        ScheduleOutcome::Scheduled(_)
    ));
    tick(&mut scheduler, &mut frames, &drawn);
    assert_eq!(*drawn.borrow(), vec![4, 4]);
}

#[test]
fn teardown_cancels_pending_frame() {
    let mut scheduler = RenderScheduler::new();
    let mut frames = FrameQueue::new();

    scheduler.schedule(1, &mut frames);
    scheduler.teardown(&mut frames);

    assert_eq!(frames.pending_count(), 0);
    assert_eq!(frames.cancelled_total(), 1);
    assert_eq!(scheduler.pending_frame(), None);
}

#[derive(Default)]
struct CountingFrames {
    next: u64,
    cancelled: Vec<FrameHandle>,
}

impl FrameRequester for CountingFrames {
    fn request_frame(&mut self) -> FrameHandle {
        self.next += 1;
        FrameHandle::from_raw(self.next)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled.push(handle);
    }
}

#[test]
fn works_with_any_frame_source() {
    let mut scheduler = RenderScheduler::new();
    let mut frames = CountingFrames::default();

    scheduler.schedule("a", &mut frames);
    scheduler.schedule("b", &mut frames);

    assert_eq!(frames.cancelled, vec![FrameHandle::from_raw(1)]);
    assert_eq!(scheduler.pending_frame(), Some(FrameHandle::from_raw(2)));
    assert_eq!(scheduler.latest_dependencies(), Some(&"b"));
}
