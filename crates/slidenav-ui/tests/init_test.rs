//! Initialization wiring and contract violations.

use slidenav_foundation::WrapperEvent;
use slidenav_testing::robot_assertions::assert_settled_on;
use slidenav_testing::{init_test_logging, FakeDom, SlideRobot};
use slidenav_ui::{SlideError, SlideIndex};

#[test]
fn init_wires_listeners_and_activates_first_slide() {
    init_test_logging();
    let robot = SlideRobot::new(FakeDom::full_width(4, 200.0));
    assert!(!robot.slide().is_initialized());
    assert!(robot.dom().listeners().is_empty());

    robot.init().expect("slide init succeeds");

    let dom = robot.dom();
    for event in WrapperEvent::GESTURE {
        assert!(dom.is_listening(event), "{} attached", event);
    }
    assert!(!dom.is_listening(WrapperEvent::MouseMove));
    assert!(!dom.is_listening(WrapperEvent::TouchMove));
    assert!(dom.is_listening_resize());
    assert!(dom.transition_enabled());
    drop(dom);

    assert_eq!(
        robot.slide().index(),
        Some(SlideIndex {
            prev: None,
            active: 0,
            next: Some(1)
        })
    );
    assert_settled_on(&robot, 0);
}

#[test]
fn init_twice_is_rejected() {
    init_test_logging();
    let robot = SlideRobot::launch(FakeDom::full_width(2, 200.0));

    assert_eq!(robot.init(), Err(SlideError::AlreadyInitialized));
    assert_eq!(robot.dom().listeners().len(), WrapperEvent::GESTURE.len());
}

#[test]
fn empty_wrapper_fails_init() {
    init_test_logging();
    let robot = SlideRobot::new(FakeDom::new(200.0));

    assert_eq!(robot.init(), Err(SlideError::NoSlides));
    assert!(!robot.slide().is_initialized());
}

#[test]
fn navigation_before_init_is_rejected() {
    init_test_logging();
    let robot = SlideRobot::new(FakeDom::full_width(3, 200.0));

    assert_eq!(
        robot.slide_mut().active_next_slide(),
        Err(SlideError::NotInitialized)
    );
    assert_eq!(
        robot.slide_mut().active_prev_slide(),
        Err(SlideError::NotInitialized)
    );
}

#[test]
fn out_of_range_index_leaves_state_untouched() {
    init_test_logging();
    let robot = SlideRobot::launch(FakeDom::full_width(5, 200.0));
    robot.slide_mut().change_slide(2).expect("slide 2 exists");

    assert_eq!(
        robot.slide_mut().change_slide(7),
        Err(SlideError::IndexOutOfRange { index: 7, len: 5 })
    );
    assert_settled_on(&robot, 2);
}

#[test]
fn narrow_slides_start_centered() {
    init_test_logging();
    let dom = FakeDom::new(1000.0)
        .with_slide(300.0)
        .with_slide(300.0)
        .with_slide(300.0);
    let robot = SlideRobot::launch(dom);

    assert_eq!(robot.positions(), vec![350.0, 50.0, -250.0]);
    assert_eq!(robot.translate(), 350.0);
    assert_eq!(
        robot.dom().wrapper_transform().as_deref(),
        Some("translate3d(350px, 0, 0)")
    );
}
