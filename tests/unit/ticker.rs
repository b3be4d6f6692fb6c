use super::*;
use calloop::EventLoop;

fn pump(event_loop: &mut EventLoop<'_, u32>, count: &mut u32, rounds: usize) {
    for _ in 0..rounds {
        event_loop
            .dispatch(Some(Duration::from_millis(10)), count)
            .unwrap();
    }
}

#[test]
fn fires_repeatedly_until_stopped() {
    let mut event_loop: EventLoop<'_, u32> = EventLoop::try_new().unwrap();
    let mut ticker = Ticker::with_delay(event_loop.handle(), Duration::from_millis(2));
    let mut count = 0u32;

    assert!(ticker.start(|n: &mut u32| *n += 1).unwrap());
    while count < 3 {
        pump(&mut event_loop, &mut count, 1);
    }
    assert!(ticker.stop());
    let frozen = count;
    pump(&mut event_loop, &mut count, 5);
    assert_eq!(count, frozen, "no callbacks after stop");
}

#[test]
fn second_start_does_not_schedule_another_series() {
    let mut event_loop: EventLoop<'_, u32> = EventLoop::try_new().unwrap();
    let mut ticker = Ticker::with_delay(event_loop.handle(), Duration::from_millis(5));
    let mut count = 0u32;

    assert!(ticker.start(|n: &mut u32| *n += 1).unwrap());
    assert!(!ticker.start(|n: &mut u32| *n += 100).unwrap());
    assert!(ticker.is_running());

    // One series re-arms after each firing, so a single dispatch sees at most one firing.
    let rounds = 6;
    for _ in 0..rounds {
        event_loop
            .dispatch(Some(Duration::from_millis(20)), &mut count)
            .unwrap();
    }
    assert!(count >= 1);
    assert!(count <= rounds as u32, "count={count}");
}

#[test]
fn stalled_loop_fires_once_instead_of_catching_up() {
    let mut event_loop: EventLoop<'_, u32> = EventLoop::try_new().unwrap();
    let mut ticker = Ticker::with_delay(event_loop.handle(), Duration::from_millis(5));
    let mut count = 0u32;

    ticker.start(|n: &mut u32| *n += 1).unwrap();
    // Twelve intervals elapse with nobody dispatching.
    std::thread::sleep(Duration::from_millis(60));
    for _ in 0..2 {
        event_loop
            .dispatch(Some(Duration::ZERO), &mut count)
            .unwrap();
    }
    assert_eq!(count, 1, "missed intervals are dropped");
    assert!(ticker.stop());
}

#[test]
fn stop_is_idempotent() {
    let event_loop: EventLoop<'_, u32> = EventLoop::try_new().unwrap();
    let mut ticker = Ticker::new(event_loop.handle());
    assert_eq!(ticker.delay(), DELAY);
    assert!(!ticker.stop());
    ticker.start(|_: &mut u32| {}).unwrap();
    assert!(ticker.stop());
    assert!(!ticker.stop());
    assert!(!ticker.is_running());
}

#[test]
fn restart_after_stop_schedules_again() {
    let mut event_loop: EventLoop<'_, u32> = EventLoop::try_new().unwrap();
    let mut ticker = Ticker::with_delay(event_loop.handle(), Duration::from_millis(1));
    let mut count = 0u32;
    ticker.start(|n: &mut u32| *n += 1).unwrap();
    ticker.stop();
    assert!(ticker.start(|n: &mut u32| *n += 1).unwrap());
    while count == 0 {
        pump(&mut event_loop, &mut count, 1);
    }
    assert!(ticker.stop());
}
