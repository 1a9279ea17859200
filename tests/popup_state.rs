use hover_popup::popup::tree::Role;
use hover_popup::popup::{self, CONTENT_TEXT, PointerEvent, PopupTrigger, TRIGGER_LABEL};

fn panel_present(widget: &PopupTrigger) -> bool {
    widget.render().contains_role(Role::Panel)
}

#[test]
fn initial_render_has_no_panel() {
    let widget = PopupTrigger::new();
    assert!(!widget.is_panel_visible());
    assert!(!widget.is_full());

    let tree = widget.render();
    assert!(!tree.contains_role(Role::Panel));
    assert!(!tree.contains_text(CONTENT_TEXT));
    assert_eq!(tree.texts(), vec![TRIGGER_LABEL]);
}

#[test]
fn enter_shows_panel_and_leave_removes_it() {
    let mut widget = PopupTrigger::new();

    assert!(widget.handle(PointerEvent::Enter));
    assert!(panel_present(&widget));

    assert!(widget.handle(PointerEvent::Leave));
    assert!(!panel_present(&widget));
    // Gone from the tree, not just hidden.
    assert!(!widget.render().contains_text(CONTENT_TEXT));
}

#[test]
fn click_sets_full_flag_without_touching_visibility() {
    let mut hidden = PopupTrigger::new();
    assert!(hidden.handle(PointerEvent::Click));
    assert!(hidden.is_full());
    assert!(!panel_present(&hidden));

    let mut shown = PopupTrigger::new();
    shown.handle(PointerEvent::Enter);
    let before = shown.render();
    assert!(shown.handle(PointerEvent::Click));
    assert!(shown.is_full());
    assert!(panel_present(&shown));

    // The flag reaches the content block but changes nothing a user can see.
    let after = shown.render();
    assert_eq!(before.texts(), after.texts());
    let content_before = before.find(Role::Content).expect("content before click");
    let content_after = after.find(Role::Content).expect("content after click");
    assert_eq!(content_before.get_attribute("full"), Some("false"));
    assert_eq!(content_after.get_attribute("full"), Some("true"));
    assert_eq!(content_before.children(), content_after.children());
    assert_eq!(
        before.find(Role::Panel).map(|panel| panel.children().len()),
        after.find(Role::Panel).map(|panel| panel.children().len())
    );
}

#[test]
fn full_flag_survives_leave_and_reenter() {
    let (widget, _) = popup::replay(&[
        PointerEvent::Enter,
        PointerEvent::Click,
        PointerEvent::Leave,
        PointerEvent::Enter,
    ]);
    assert!(widget.is_full());
    assert!(widget.is_panel_visible());
}

#[test]
fn repeated_events_change_nothing_after_the_first() {
    let (_, transitions) = popup::replay(&[
        PointerEvent::Enter,
        PointerEvent::Enter,
        PointerEvent::Enter,
        PointerEvent::Leave,
        PointerEvent::Leave,
        PointerEvent::Click,
        PointerEvent::Click,
    ]);
    let changed: Vec<bool> = transitions.iter().map(|step| step.changed).collect();
    assert_eq!(changed, vec![true, false, false, true, false, true, false]);
}

#[test]
fn leave_on_fresh_widget_is_a_no_op() {
    let mut widget = PopupTrigger::new();
    assert!(!widget.handle(PointerEvent::Leave));
    assert_eq!(widget, PopupTrigger::default());
}

#[test]
fn remount_starts_cleared() {
    let (widget, _) = popup::replay(&[PointerEvent::Enter, PointerEvent::Click]);
    assert!(widget.is_full());
    drop(widget);

    let (remounted, transitions) = popup::replay(&[]);
    assert!(transitions.is_empty());
    assert_eq!(remounted, PopupTrigger::new());
}

#[test]
fn hover_handlers_sit_on_region_and_trigger() {
    use hover_popup::popup::tree::Handler;

    let tree = PopupTrigger::new().render();
    let region = tree.find(Role::HoverRegion).expect("hover region");
    assert!(region.handlers().contains(&Handler::PointerEnter));
    assert!(region.handlers().contains(&Handler::PointerLeave));

    let trigger = tree.find_button().expect("trigger");
    assert_eq!(
        trigger.handlers(),
        &[Handler::PointerEnter, Handler::PointerLeave, Handler::Click]
    );
}
