//! Previous/next arrows wired through `SlideNav`.

use slidenav_testing::robot_assertions::{assert_index_consistent, assert_settled_on};
use slidenav_testing::{init_test_logging, FakeArrows, FakeDom, SlideRobot};
use slidenav_ui::{ArrowOptions, Slide, SlideConfig, SlideError, SlideNav};

fn robot_with_arrows() -> SlideRobot {
    init_test_logging();
    let mut robot = SlideRobot::launch(FakeDom::full_width(5, 200.0));
    robot.add_arrows().expect("arrows resolve");
    robot
}

#[test]
fn add_arrow_registers_one_handler_per_trigger() {
    let robot = robot_with_arrows();

    assert_eq!(robot.arrows().handler_count(".prev"), 1);
    assert_eq!(robot.arrows().handler_count(".next"), 1);
    assert_eq!(
        robot.nav().arrows(),
        Some(&ArrowOptions::new(".prev", ".next"))
    );
}

#[test]
fn next_and_prev_arrows_navigate() {
    let mut robot = robot_with_arrows();

    assert!(robot.click(".next"));
    assert_settled_on(&robot, 1);
    assert_eq!(robot.translate(), -200.0);

    assert!(robot.click(".next"));
    assert!(robot.click(".prev"));
    assert_settled_on(&robot, 1);
}

#[test]
fn prev_on_first_slide_is_noop() {
    let mut robot = robot_with_arrows();
    let writes = robot.dom().transform_writes().len();

    robot.click(".prev");

    assert_eq!(robot.dom().transform_writes().len(), writes);
    assert_settled_on(&robot, 0);
}

#[test]
fn next_on_last_slide_is_noop() {
    let mut robot = robot_with_arrows();

    for _ in 0..8 {
        robot.click(".next");
        assert_index_consistent(&robot);
    }

    assert_settled_on(&robot, 4);
    assert_eq!(robot.translate(), -800.0);
}

#[test]
fn arrows_and_drags_share_the_index() {
    let mut robot = robot_with_arrows();

    robot.click(".next");
    robot.drag(300.0, 150.0);
    assert_settled_on(&robot, 2);

    robot.click(".prev");
    robot.drag(150.0, 300.0);
    assert_settled_on(&robot, 0);
}

#[test]
fn missing_arrow_element_is_reported() {
    init_test_logging();
    let mut robot = SlideRobot::launch(FakeDom::full_width(3, 200.0));

    let err = robot
        .add_arrow(ArrowOptions::new(".missing", ".next"))
        .expect_err("selector does not resolve");

    assert_eq!(err, SlideError::SelectorNotFound(".missing".to_string()));
    assert!(robot.nav().arrows().is_none());
    assert_eq!(robot.arrows().handler_count(".next"), 0);
}

#[test]
fn arrow_before_init_leaves_controller_untouched() {
    init_test_logging();
    let mut robot = SlideRobot::new(FakeDom::full_width(3, 200.0));
    robot.add_arrows().expect("arrows resolve");

    assert!(robot.click(".next"));

    assert!(robot.slide().index().is_none());
    assert!(robot.dom().translate().is_none());
}

#[test]
fn arrows_outliving_the_controller_do_nothing() {
    init_test_logging();
    let mut arrows = FakeArrows::new([".prev", ".next"]);
    {
        let mut nav = SlideNav::new(Slide::new(
            FakeDom::full_width(3, 200.0),
            SlideConfig::default(),
        ));
        nav.init().expect("slide init succeeds");
        nav.add_arrow(&mut arrows, ArrowOptions::new(".prev", ".next"))
            .expect("arrows resolve");
    }

    assert!(arrows.click(".next"));
    assert!(arrows.click(".prev"));
}
