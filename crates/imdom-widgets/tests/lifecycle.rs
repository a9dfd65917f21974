//! Bind/unbind lifecycle, the liveness sweep, visual-property caching, and
//! the cached-instance entry point, driven through the headless harness.

use imdom_core::{FieldAttr, FieldKind, PercentPos, PlatformField, TextType, VirtualRect};
use imdom_harness::Fixture;
use imdom_widgets::{Autocomplete, EditBox, EditBoxFlags, EditBoxParams, UiContext, edit_box};

fn base_params() -> EditBoxParams {
    EditBoxParams::new()
        .at(10.0, 20.0)
        .width(200.0)
        .font_height(24.0)
}

/// Run one full frame (widget plus end-of-frame sweep) and advance the clock.
fn run_frame(fx: &mut Fixture, ctx: &mut UiContext, eb: &EditBox, params: &EditBoxParams) {
    eb.run(ctx, &mut fx.frame(), params);
    ctx.tick(&fx.clock);
    fx.next_frame();
}

// --- Binding ---

#[test]
fn first_run_binds_and_configures_field() {
    let mut fx = Fixture::new();
    let mut ctx = UiContext::new();
    let params = base_params().text("hi").placeholder("Name");
    let eb = EditBox::new(&params);

    let res = eb.run(&mut ctx, &mut fx.frame(), &params);
    assert!(res.is_none());
    assert!(!eb.is_focused());

    let field = fx.surface.field(eb.id()).expect("field bound");
    assert_eq!(field.value(), "hi");
    assert_eq!(field.value_writes(), 1);
    assert_eq!(field.focus_calls(), 0);
    let attrs = field.attrs();
    assert!(attrs.contains(&FieldAttr::TextType(TextType::Text)));
    assert!(attrs.contains(&FieldAttr::Placeholder("Name".to_owned())));
    assert!(attrs.contains(&FieldAttr::TabIndex(2)));
    assert_eq!(fx.surface.field_kind(eb.id()), Some(FieldKind::SingleLine));
    assert_eq!(fx.surface.submit_hook_installs(), 1);

    assert_eq!(
        field.position(),
        Some(PercentPos {
            left: 1.0,
            top: 2.0,
            width: 20.0,
        })
    );
    assert_eq!(field.font(), Some((24, 1.0)));
    let ac = field.autocomplete_writes();
    assert_eq!(ac.len(), 1);
    assert!(ac[0].starts_with("auto-off-"));

    assert_eq!(
        fx.input.consumed_click_bounds(),
        &[VirtualRect::new(10.0, 20.0, 200.0, 24.0)]
    );
}

#[test]
fn multiline_field_uses_rows_and_cols() {
    let mut fx = Fixture::new();
    let mut ctx = UiContext::new();
    let params = base_params().max_lines(3).max_len(10);
    let eb = EditBox::new(&params);
    eb.run(&mut ctx, &mut fx.frame(), &params);

    assert_eq!(
        fx.surface.field_kind(eb.id()),
        Some(FieldKind::MultiLine { rows: 3 })
    );
    let attrs = fx.surface.field(eb.id()).unwrap().attrs();
    assert!(attrs.contains(&FieldAttr::Rows(3)));
    assert!(attrs.contains(&FieldAttr::Cols(10)));
    assert!(!attrs.iter().any(|a| matches!(a, FieldAttr::MaxLength(_))));
}

#[test]
fn single_line_length_limit_uses_native_maxlength() {
    let mut fx = Fixture::new();
    let mut ctx = UiContext::new();
    let params = base_params().max_len(5);
    let eb = EditBox::new(&params);
    eb.run(&mut ctx, &mut fx.frame(), &params);

    let attrs = fx.surface.field(eb.id()).unwrap().attrs();
    assert!(attrs.contains(&FieldAttr::MaxLength(5)));
    assert_eq!(fx.surface.field_kind(eb.id()), Some(FieldKind::SingleLine));
}

#[test]
fn uppercase_and_spellcheck_flags_become_attrs() {
    let mut fx = Fixture::new();
    let mut ctx = UiContext::new();
    let flags = (EditBoxFlags::default() | EditBoxFlags::UPPERCASE) - EditBoxFlags::SPELLCHECK;
    let params = base_params().flags(flags);
    let eb = EditBox::new(&params);
    eb.run(&mut ctx, &mut fx.frame(), &params);

    let attrs = fx.surface.field(eb.id()).unwrap().attrs();
    assert!(attrs.contains(&FieldAttr::Uppercase));
    assert!(attrs.contains(&FieldAttr::SpellcheckOff));
}

#[test]
fn initial_select_selects_the_whole_value() {
    let mut fx = Fixture::new();
    let mut ctx = UiContext::new();
    let params = base_params()
        .text("hello")
        .flags(EditBoxFlags::default() | EditBoxFlags::INITIAL_SELECT);
    let eb = EditBox::new(&params);
    eb.run(&mut ctx, &mut fx.frame(), &params);

    let field = fx.surface.field(eb.id()).unwrap();
    assert_eq!(field.selection(), imdom_core::Selection::new(0, 5));
}

#[test]
fn initial_focus_pulls_native_focus_on_bind() {
    let mut fx = Fixture::new();
    let mut ctx = UiContext::new();
    let params = base_params().flags(EditBoxFlags::default() | EditBoxFlags::INITIAL_FOCUS);
    let eb = EditBox::new(&params);
    eb.run(&mut ctx, &mut fx.frame(), &params);

    let field = fx.surface.field(eb.id()).unwrap();
    assert_eq!(field.focus_calls(), 1);
    assert!(field.is_focused());
    assert!(ctx.any_edit_box_active(&fx.clock));
}

#[test]
fn keystroke_listener_only_installed_when_constrained() {
    let mut fx = Fixture::new();
    let mut ctx = UiContext::new();

    let free = EditBox::new(&base_params());
    free.run(&mut ctx, &mut fx.frame(), &base_params());
    assert!(!fx.surface.field(free.id()).unwrap().has_listener());

    let limited_params = base_params().max_len(8);
    let limited = EditBox::new(&limited_params);
    limited.run(&mut ctx, &mut fx.frame(), &limited_params);
    assert!(fx.surface.field(limited.id()).unwrap().has_listener());
}

#[test]
fn submit_hook_installs_once_across_widgets() {
    let mut fx = Fixture::new();
    let mut ctx = UiContext::new();
    let a = EditBox::new(&base_params());
    let b = EditBox::new(&base_params());
    a.run(&mut ctx, &mut fx.frame(), &base_params());
    b.run(&mut ctx, &mut fx.frame(), &base_params());
    assert_eq!(fx.surface.submit_hook_installs(), 1);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "ran twice in tick")]
fn second_run_in_the_same_tick_is_a_usage_error() {
    let mut fx = Fixture::new();
    let mut ctx = UiContext::new();
    let params = EditBoxParams::new();
    let eb = EditBox::new(&params);
    eb.run(&mut ctx, &mut fx.frame(), &params);
    eb.run(&mut ctx, &mut fx.frame(), &params);
}

// --- Visual-property caching ---

#[test]
fn steady_frames_do_not_rewrite_cached_properties() {
    let mut fx = Fixture::new();
    let mut ctx = UiContext::new();
    let params = base_params().text("hi");
    let eb = EditBox::new(&params);

    run_frame(&mut fx, &mut ctx, &eb, &params);
    let field = fx.surface.field(eb.id()).unwrap();
    run_frame(&mut fx, &mut ctx, &eb, &EditBoxParams::new());
    run_frame(&mut fx, &mut ctx, &eb, &EditBoxParams::new());

    assert_eq!(field.font_writes(), 1);
    assert_eq!(field.autocomplete_writes().len(), 1);
    assert_eq!(field.value_writes(), 1);
}

#[test]
fn autocomplete_rewrites_only_on_config_change() {
    let mut fx = Fixture::new();
    let mut ctx = UiContext::new();
    let params = base_params();
    let eb = EditBox::new(&params);

    run_frame(&mut fx, &mut ctx, &eb, &params);
    let field = fx.surface.field(eb.id()).unwrap();

    let with_token = EditBoxParams::new().autocomplete(Autocomplete::Token("username".to_owned()));
    run_frame(&mut fx, &mut ctx, &eb, &with_token);
    run_frame(&mut fx, &mut ctx, &eb, &with_token);

    let writes = field.autocomplete_writes();
    assert_eq!(writes.len(), 2);
    assert!(writes[0].starts_with("auto-off-"));
    assert_eq!(writes[1], "username");
}

#[test]
fn font_rewrites_only_when_rounded_px_changes() {
    let mut fx = Fixture::new();
    let mut ctx = UiContext::new();
    let params = base_params();
    let eb = EditBox::new(&params);

    run_frame(&mut fx, &mut ctx, &eb, &params);
    let field = fx.surface.field(eb.id()).unwrap();
    assert_eq!(field.font(), Some((24, 1.0)));

    // 24.48px still floors to 24: no write.
    fx.surface.set_font_px_per_unit(1.02);
    run_frame(&mut fx, &mut ctx, &eb, &EditBoxParams::new());
    assert_eq!(field.font_writes(), 1);

    // 25.2px floors to 25: rewrite with a fractional corrective scale.
    fx.surface.set_font_px_per_unit(1.05);
    run_frame(&mut fx, &mut ctx, &eb, &EditBoxParams::new());
    assert_eq!(field.font_writes(), 2);
    let (px, scale) = field.font().unwrap();
    assert_eq!(px, 25);
    let expected = 24.0f32 * 1.05 / 25.0;
    assert!((scale - expected).abs() < 1e-6);
}

// --- Liveness sweep ---

#[test]
fn sweep_unbinds_a_widget_that_skipped_a_frame() {
    let mut fx = Fixture::new();
    let mut ctx = UiContext::new();
    let params = base_params().text("hi");
    let eb = EditBox::new(&params);

    run_frame(&mut fx, &mut ctx, &eb, &params);
    let old_field = fx.surface.field(eb.id()).unwrap();

    // Frame 2: the widget does not run; the sweep drops its binding.
    ctx.tick(&fx.clock);
    fx.next_frame();

    eb.set_text("zz");
    assert_eq!(eb.text(), "zz");
    assert_eq!(old_field.value(), "hi"); // Unbound: no write-through.

    // Frame 3: running again rebinds to a fresh field carrying the text.
    run_frame(&mut fx, &mut ctx, &eb, &EditBoxParams::new());
    let new_field = fx.surface.field(eb.id()).unwrap();
    assert_eq!(new_field.value(), "zz");
    assert_eq!(old_field.value(), "hi");
}

#[test]
fn sweep_keeps_a_widget_that_runs_every_frame() {
    let mut fx = Fixture::new();
    let mut ctx = UiContext::new();
    let params = base_params().text("hi");
    let eb = EditBox::new(&params);

    run_frame(&mut fx, &mut ctx, &eb, &params);
    let field = fx.surface.field(eb.id()).unwrap();
    run_frame(&mut fx, &mut ctx, &eb, &EditBoxParams::new());
    run_frame(&mut fx, &mut ctx, &eb, &EditBoxParams::new());

    eb.set_text("zz");
    assert_eq!(field.value(), "zz"); // Still bound: write-through works.
}

#[test]
fn active_flag_expires_when_the_widget_stops_running() {
    let mut fx = Fixture::new();
    let mut ctx = UiContext::new();
    let params = base_params().steal_focus();
    let eb = EditBox::new(&params);

    run_frame(&mut fx, &mut ctx, &eb, &params);
    assert!(ctx.any_edit_box_active(&fx.clock)); // Frame 2: last frame counts.

    ctx.tick(&fx.clock);
    fx.next_frame();
    assert!(!ctx.any_edit_box_active(&fx.clock)); // Frame 3: expired.
}

// --- Slot denial and recycling ---

#[test]
fn denied_slot_unbinds_until_layout_grants_it_again() {
    let mut fx = Fixture::new();
    let mut ctx = UiContext::new();
    let params = base_params().text("hi");
    let eb = EditBox::new(&params);

    run_frame(&mut fx, &mut ctx, &eb, &params);
    let old_field = fx.surface.field(eb.id()).unwrap();

    fx.surface.deny_slot(eb.id(), true);
    run_frame(&mut fx, &mut ctx, &eb, &EditBoxParams::new());
    eb.set_text("zz");
    assert_eq!(old_field.value(), "hi"); // Unbound while hidden.

    fx.surface.deny_slot(eb.id(), false);
    run_frame(&mut fx, &mut ctx, &eb, &EditBoxParams::new());
    let new_field = fx.surface.field(eb.id()).unwrap();
    assert_eq!(new_field.value(), "zz");
}

#[test]
fn focus_registry_denial_drops_the_binding() {
    let mut fx = Fixture::new();
    let mut ctx = UiContext::new();
    let params = base_params().text("hi");
    let eb = EditBox::new(&params);

    run_frame(&mut fx, &mut ctx, &eb, &params);
    let field = fx.surface.field(eb.id()).unwrap();

    // A modal takes over: the registry denies focusability entirely.
    fx.focus.deny_focus(true);
    run_frame(&mut fx, &mut ctx, &eb, &EditBoxParams::new());
    eb.set_text("zz");
    assert_eq!(field.value(), "hi");
}

#[test]
fn recycled_element_rebinds_to_a_fresh_field() {
    let mut fx = Fixture::new();
    let mut ctx = UiContext::new();
    let params = base_params().text("hi");
    let eb = EditBox::new(&params);

    run_frame(&mut fx, &mut ctx, &eb, &params);
    let old_field = fx.surface.field(eb.id()).unwrap();

    fx.surface.recycle_slot(eb.id());
    run_frame(&mut fx, &mut ctx, &eb, &EditBoxParams::new());
    let new_field = fx.surface.field(eb.id()).unwrap();
    assert_eq!(new_field.value(), "hi");
    assert_eq!(old_field.value_writes(), 1); // Dead handle: untouched.
}

// --- Cached-instance entry point ---

#[test]
fn cached_entry_point_reuses_the_instance_across_frames() {
    let mut fx = Fixture::new();
    let mut ctx = UiContext::new();

    let out1 = edit_box(&mut ctx, &mut fx.frame(), 42, &base_params().text("x"));
    assert_eq!(out1.text, "x");
    ctx.tick(&fx.clock);
    fx.next_frame();

    let out2 = edit_box(&mut ctx, &mut fx.frame(), 42, &EditBoxParams::new());
    assert_eq!(out2.edit_box.id(), out1.edit_box.id());
    assert_eq!(out2.text, "x"); // Unset params keep previous state.
}
