//! Routes drags inside a modal that contains a horizontal carousel, using
//! the headless scroll model and region tree.

use swerve_ui::*;

struct ModalFixture {
    router: GestureIntentRouter<RegionTree>,
    modal: ModalState,
    body: ScrollState,
    carousel: ScrollState,
    text: NodeId,
    slide: NodeId,
}

fn modal_with_carousel() -> ModalFixture {
    let body = ScrollState::vertical(400.0, 2000.0);
    let carousel = ScrollState::horizontal(300.0, 1200.0);

    let mut tree = RegionTree::new();
    let content = tree.add_root();
    let text = tree.add_child(content);
    let strip = tree.add_region(Some(content), carousel.clone());
    let slide = tree.add_child(strip);

    let modal = ModalState::new();
    modal.open();
    let router = GestureIntentRouter::new(std::rc::Rc::new(body.clone()), tree)
        .with_activation(modal.activation());

    ModalFixture {
        router,
        modal,
        body,
        carousel,
        text,
        slide,
    }
}

#[test]
fn vertical_drag_over_carousel_scrolls_modal_body() {
    let mut f = modal_with_carousel();
    f.router.on_gesture_start(Point::new(100.0, 100.0), &f.slide);

    let mut prevented = 0;
    f.router.on_gesture_move(Point::new(100.0, 140.0), || prevented += 1);

    assert_eq!(f.router.intent(), Some(GestureIntent::Vertical));
    assert_eq!(f.body.value(), 360.0);
    assert_eq!(f.carousel.value(), 300.0);
    assert_eq!(prevented, 1);
}

#[test]
fn horizontal_drag_over_carousel_scrolls_carousel() {
    let mut f = modal_with_carousel();
    f.router.on_gesture_start(Point::new(100.0, 100.0), &f.slide);

    let outcome = f.router.on_gesture_move(Point::new(140.0, 102.0), || {});
    assert_eq!(outcome, MoveDisposition::ScrolledHorizontal { consumed: -40.0 });
    assert_eq!(f.carousel.value(), 260.0);
    assert_eq!(f.body.value(), 400.0);

    // Later vertical motion stays on the carousel axis.
    f.router.on_gesture_move(Point::new(130.0, 300.0), || {});
    assert_eq!(f.carousel.value(), 270.0);
    assert_eq!(f.body.value(), 400.0);
}

#[test]
fn horizontal_drag_outside_carousel_is_left_native() {
    let mut f = modal_with_carousel();
    f.router.on_gesture_start(Point::new(100.0, 100.0), &f.text);

    let mut prevented = false;
    let outcome = f.router.on_gesture_move(Point::new(160.0, 100.0), || prevented = true);
    assert_eq!(outcome, MoveDisposition::PassedThrough);
    assert!(!prevented);
    assert_eq!(f.body.value(), 400.0);
    assert_eq!(f.carousel.value(), 300.0);
}

#[test]
fn closed_modal_leaves_gestures_alone() {
    let mut f = modal_with_carousel();
    f.modal.close();

    assert!(!f.router.on_gesture_start(Point::new(0.0, 0.0), &f.slide));
    let outcome = f.router.on_gesture_move(Point::new(0.0, 80.0), || {});
    assert_eq!(outcome, MoveDisposition::NoSession);
    assert_eq!(f.body.value(), 400.0);
}

#[test]
fn body_scroll_clamps_at_top_but_still_suppresses() {
    let mut f = modal_with_carousel();
    f.body.scroll_to(10.0);
    f.router.on_gesture_start(Point::new(50.0, 50.0), &f.text);

    let mut prevented = 0;
    let outcome = f.router.on_gesture_move(Point::new(50.0, 150.0), || prevented += 1);
    assert_eq!(outcome, MoveDisposition::ScrolledVertical { consumed: -10.0 });
    assert_eq!(f.body.value(), 0.0);
    assert_eq!(prevented, 1);
}
