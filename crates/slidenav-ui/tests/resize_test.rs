//! Window resize: debounce, settle delay and relayout.

use slidenav_foundation::WrapperEvent;
use slidenav_testing::robot_assertions::{assert_index_consistent, assert_settled_on};
use slidenav_testing::{init_test_logging, FakeDom, SlideRobot};
use slidenav_ui::{SlideConfig, SlideError};
use web_time::Duration;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn robot_on_slide_two() -> SlideRobot {
    init_test_logging();
    let robot = SlideRobot::launch(FakeDom::full_width(5, 200.0));
    robot.slide_mut().change_slide(2).expect("slide 2 exists");
    robot
}

#[test]
fn relayout_waits_for_debounce_and_settle_delay() {
    let mut robot = robot_on_slide_two();
    robot.dom_mut().reflow(400.0, &[400.0; 5]);

    robot.resize_window();
    robot.advance_time(ms(199));
    assert!(robot.slide().next_deadline().is_some());
    robot.advance_time(ms(1));
    // Debounce fired; the layout is read only after the settle delay.
    robot.advance_time(ms(499));
    assert_eq!(robot.translate(), -400.0);
    assert_eq!(robot.positions()[2], -400.0);

    robot.advance_time(ms(1));

    assert_eq!(robot.slide().slides().len(), 5);
    assert_eq!(
        robot.positions(),
        vec![0.0, -400.0, -800.0, -1200.0, -1600.0]
    );
    assert_eq!(robot.translate(), -800.0);
    assert_settled_on(&robot, 2);
    assert!(robot.slide().next_deadline().is_none());
}

#[test]
fn burst_of_resize_events_relayouts_once() {
    let mut robot = robot_on_slide_two();
    robot.dom_mut().reflow(300.0, &[300.0; 5]);
    let writes = robot.dom().transform_writes().len();

    for _ in 0..5 {
        robot.resize_window();
        robot.advance_time(ms(150));
    }
    // Still inside the quiet period of the last event.
    assert_eq!(robot.dom().transform_writes().len(), writes);

    robot.wait_for_idle();

    assert_eq!(robot.dom().transform_writes().len(), writes + 1);
    assert_eq!(robot.translate(), -600.0);
    assert_settled_on(&robot, 2);
}

#[test]
fn later_resize_replaces_pending_settle() {
    let mut robot = robot_on_slide_two();
    robot.dom_mut().reflow(400.0, &[400.0; 5]);
    let writes = robot.dom().transform_writes().len();

    let start = robot.now();
    robot.resize_window();
    robot.advance_time(ms(200));
    robot.advance_time(ms(100));
    robot.resize_window();
    robot.advance_time(ms(200));

    // First settle would have been due at +700.
    robot.advance_time(ms(200));
    assert_eq!(robot.dom().transform_writes().len(), writes);

    let deadline = robot.slide().next_deadline().expect("settle pending");
    assert_eq!(deadline, start + ms(1000));
    robot.wait_for_idle();

    assert_eq!(robot.dom().transform_writes().len(), writes + 1);
    assert_settled_on(&robot, 2);
}

#[test]
fn relayout_keeps_narrow_slides_centered() {
    init_test_logging();
    let dom = FakeDom::new(1000.0)
        .with_slide(300.0)
        .with_slide(300.0)
        .with_slide(300.0);
    let mut robot = SlideRobot::launch(dom);
    robot.slide_mut().change_slide(1).expect("slide 1 exists");
    assert_eq!(robot.translate(), 50.0);

    robot.dom_mut().reflow(600.0, &[300.0, 300.0, 300.0]);
    robot.resize_window();
    robot.wait_for_idle();

    // 150px margin on each side of slide 1 at left 300.
    assert_eq!(robot.translate(), -150.0);
    assert_settled_on(&robot, 1);
}

#[test]
fn relayout_after_slides_removed_falls_back_to_last() {
    let mut robot = robot_on_slide_two();
    robot.slide_mut().change_slide(4).expect("slide 4 exists");
    robot.dom_mut().reflow(200.0, &[200.0, 200.0]);

    robot.resize_window();
    robot.wait_for_idle();

    assert_eq!(robot.slide().slides().len(), 2);
    assert_settled_on(&robot, 1);
}

#[test]
fn drag_after_relayout_uses_new_positions() {
    let mut robot = robot_on_slide_two();
    robot.dom_mut().reflow(400.0, &[400.0; 5]);
    robot.resize_window();
    robot.wait_for_idle();

    robot.drag(300.0, 150.0);

    assert_eq!(robot.translate(), -1200.0);
    assert_settled_on(&robot, 3);
}

#[test]
fn emptied_wrapper_keeps_previous_layout() {
    let robot = robot_on_slide_two();
    robot.dom_mut().reflow(200.0, &[]);
    robot.slide_mut().notify_resize(robot.now());

    let debounced = robot.now() + ms(200);
    robot.slide_mut().tick(debounced).expect("debounce only schedules");
    let err = robot
        .slide_mut()
        .tick(debounced + ms(500))
        .expect_err("nothing left to lay out");

    assert!(matches!(err, SlideError::NoSlides));
    assert_eq!(robot.slide().slides().len(), 5);
    assert_index_consistent(&robot);
    assert_eq!(robot.active(), 2);
    assert_eq!(robot.translate(), -400.0);
}

#[test]
fn failed_relayout_still_ends_a_timed_out_drag() {
    init_test_logging();
    let config = SlideConfig::default().with_gesture_timeout(Duration::from_secs(1));
    let mut robot = SlideRobot::launch_with_config(FakeDom::full_width(5, 200.0), config);
    robot.mouse_down(300.0);
    robot.mouse_move(200.0);
    robot.dom_mut().reflow(200.0, &[]);
    robot.resize_window();

    let last_move = robot.now();
    robot
        .slide_mut()
        .tick(last_move + ms(200))
        .expect("debounce only schedules");
    // Settle and gesture timeout are both due on this tick.
    let err = robot
        .slide_mut()
        .tick(last_move + ms(1000))
        .expect_err("nothing left to lay out");

    assert!(matches!(err, SlideError::NoSlides));
    assert!(!robot.slide().is_dragging());
    assert!(!robot.dom().is_listening(WrapperEvent::MouseMove));
}
