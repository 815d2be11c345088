use iced::advanced::widget::{Operation, Tree, tree};
use iced::advanced::{
    self, Clipboard, Layout, Shell, Widget, layout, overlay, renderer,
};
use iced::{
    Element, Event, Length, Point, Rectangle, Size, Vector, mouse, touch,
};

/// Pixels scrolled per wheel line, matching iced's scrollable.
pub const LINE_HEIGHT_PX: f32 = 60.0;

type OnScroll<'a, Message> = dyn Fn(f32) -> Message + 'a;

/// Observes vertical scroll intent over its content before the content
/// handles it.
///
/// For every wheel or touch-drag event over its bounds, [`PreScroll`]
/// publishes the vertical delta and only then forwards the event, unchanged
/// and uncaptured, to the wrapped element. Messages published here are
/// therefore queued ahead of anything the wrapped scrollable publishes for
/// the same event.
///
/// Deltas follow the content direction: negative when the content moves up
/// to reveal what is below, positive when it moves back down.
pub struct PreScroll<'a, Message, Theme = iced::Theme, Renderer = iced::Renderer>
{
    content: Element<'a, Message, Theme, Renderer>,
    on_scroll: Box<OnScroll<'a, Message>>,
}

impl<'a, Message, Theme, Renderer> PreScroll<'a, Message, Theme, Renderer> {
    /// Wrap `content` and report each observed delta through `on_scroll`.
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        on_scroll: impl Fn(f32) -> Message + 'a,
    ) -> Self {
        Self {
            content: content.into(),
            on_scroll: Box::new(on_scroll),
        }
    }
}

/// Tracking state for an in-flight touch drag.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PreScrollState {
    finger: Option<(touch::Finger, f32)>,
}

impl PreScrollState {
    /// Extract the vertical delta carried by `event`, if it is scroll
    /// intent over `bounds`.
    pub fn observe(
        &mut self,
        event: &Event,
        cursor: mouse::Cursor,
        bounds: Rectangle,
    ) -> Option<f32> {
        match event {
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                cursor.is_over(bounds).then(|| wheel_delta_y(*delta))
            },
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if self.finger.is_none() && bounds.contains(*position) {
                    self.finger = Some((*id, position.y));
                }
                None
            },
            Event::Touch(touch::Event::FingerMoved { id, position }) => {
                self.track_finger(*id, *position)
            },
            Event::Touch(
                touch::Event::FingerLifted { id, .. }
                | touch::Event::FingerLost { id, .. },
            ) => {
                if self.finger.is_some_and(|(active, _)| active == *id) {
                    self.finger = None;
                }
                None
            },
            _ => None,
        }
    }

    fn track_finger(&mut self, id: touch::Finger, position: Point) -> Option<f32> {
        let (active, last_y) = self.finger?;
        if active != id {
            return None;
        }

        self.finger = Some((active, position.y));
        Some(position.y - last_y)
    }
}

/// Vertical component of a wheel delta, in pixels.
pub fn wheel_delta_y(delta: mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => y * LINE_HEIGHT_PX,
        mouse::ScrollDelta::Pixels { y, .. } => y,
    }
}

impl<'a, Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for PreScroll<'a, Message, Theme, Renderer>
where
    Renderer: advanced::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<PreScrollState>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(PreScrollState::default())
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(std::slice::from_ref(&self.content));
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn size_hint(&self) -> Size<Length> {
        self.content.as_widget().size_hint()
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn operate(
        &mut self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        self.content.as_widget_mut().operate(
            &mut tree.children[0],
            layout,
            renderer,
            operation,
        );
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<PreScrollState>();
        if let Some(delta_y) = state.observe(event, cursor, layout.bounds()) {
            if delta_y != 0.0 {
                shell.publish((self.on_scroll)(delta_y));
            }
        }

        // Never capture: the content sees every event we observed.
        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<PreScroll<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: advanced::Renderer + 'a,
{
    fn from(widget: PreScroll<'a, Message, Theme, Renderer>) -> Self {
        Self::new(widget)
    }
}

/// Wrap `content` in a [`PreScroll`] observer.
pub fn pre_scroll<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    on_scroll: impl Fn(f32) -> Message + 'a,
) -> PreScroll<'a, Message, Theme, Renderer> {
    PreScroll::new(content, on_scroll)
}

#[cfg(test)]
mod tests {
    use iced::advanced::widget::Tree;
    use iced::advanced::{
        Clipboard, Layout, Shell, Widget, clipboard, layout, renderer,
    };
    use iced::widget::Space;
    use iced::{
        Element, Event, Length, Point, Rectangle, Size, Theme, mouse, touch,
    };

    use super::{LINE_HEIGHT_PX, PreScrollState, pre_scroll, wheel_delta_y};

    type TestElement<'a> = Element<'a, &'static str, Theme, ()>;

    /// Child that publishes and captures every event it receives.
    struct Capturing;

    impl Widget<&'static str, Theme, ()> for Capturing {
        fn size(&self) -> Size<Length> {
            Size::new(Length::Fill, Length::Fill)
        }

        fn layout(
            &mut self,
            _tree: &mut Tree,
            _renderer: &(),
            limits: &layout::Limits,
        ) -> layout::Node {
            layout::Node::new(limits.max())
        }

        fn draw(
            &self,
            _tree: &Tree,
            _renderer: &mut (),
            _theme: &Theme,
            _style: &renderer::Style,
            _layout: Layout<'_>,
            _cursor: mouse::Cursor,
            _viewport: &Rectangle,
        ) {
        }

        fn update(
            &mut self,
            _tree: &mut Tree,
            _event: &Event,
            _layout: Layout<'_>,
            _cursor: mouse::Cursor,
            _renderer: &(),
            _clipboard: &mut dyn Clipboard,
            shell: &mut Shell<'_, &'static str>,
            _viewport: &Rectangle,
        ) {
            shell.publish("child");
            shell.capture_event();
        }
    }

    /// Run one event through `element` and return the published messages
    /// and whether the event ended up captured.
    fn dispatch(
        element: &mut TestElement<'_>,
        event: &Event,
    ) -> (Vec<&'static str>, bool) {
        let mut tree = Tree::new(&*element);
        let node = element.as_widget_mut().layout(
            &mut tree,
            &(),
            &layout::Limits::new(Size::ZERO, bounds().size()),
        );

        let mut messages = Vec::new();
        let mut shell = Shell::new(&mut messages);
        element.as_widget_mut().update(
            &mut tree,
            event,
            Layout::new(&node),
            inside(),
            &(),
            &mut clipboard::Null,
            &mut shell,
            &bounds(),
        );
        let captured = shell.is_event_captured();

        (messages, captured)
    }

    fn bounds() -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(100.0, 200.0))
    }

    fn inside() -> mouse::Cursor {
        mouse::Cursor::Available(Point::new(50.0, 50.0))
    }

    fn wheel(delta: mouse::ScrollDelta) -> Event {
        Event::Mouse(mouse::Event::WheelScrolled { delta })
    }

    fn finger(event: fn(touch::Finger, Point) -> touch::Event, y: f32) -> Event {
        Event::Touch(event(touch::Finger(1), Point::new(50.0, y)))
    }

    fn pressed(id: touch::Finger, position: Point) -> touch::Event {
        touch::Event::FingerPressed { id, position }
    }

    fn moved(id: touch::Finger, position: Point) -> touch::Event {
        touch::Event::FingerMoved { id, position }
    }

    fn lifted(id: touch::Finger, position: Point) -> touch::Event {
        touch::Event::FingerLifted { id, position }
    }

    #[test]
    fn given_line_delta_when_converting_then_lines_scale_to_pixels() {
        let delta = mouse::ScrollDelta::Lines { x: 0.0, y: -2.0 };

        assert_eq!(wheel_delta_y(delta), -2.0 * LINE_HEIGHT_PX);
    }

    #[test]
    fn given_pixel_delta_when_converting_then_vertical_component_is_kept() {
        let delta = mouse::ScrollDelta::Pixels { x: 12.0, y: 7.5 };

        assert_eq!(wheel_delta_y(delta), 7.5);
    }

    #[test]
    fn given_wheel_over_bounds_when_observed_then_delta_is_reported() {
        let mut state = PreScrollState::default();
        let event = wheel(mouse::ScrollDelta::Pixels { x: 0.0, y: -30.0 });

        assert_eq!(state.observe(&event, inside(), bounds()), Some(-30.0));
    }

    #[test]
    fn given_wheel_outside_bounds_when_observed_then_nothing_is_reported() {
        let mut state = PreScrollState::default();
        let event = wheel(mouse::ScrollDelta::Pixels { x: 0.0, y: -30.0 });
        let outside = mouse::Cursor::Available(Point::new(500.0, 500.0));

        assert_eq!(state.observe(&event, outside, bounds()), None);
        assert_eq!(state.observe(&event, mouse::Cursor::Unavailable, bounds()), None);
    }

    #[test]
    fn given_finger_drag_up_when_observed_then_delta_is_negative() {
        let mut state = PreScrollState::default();

        assert_eq!(state.observe(&finger(pressed, 150.0), inside(), bounds()), None);
        assert_eq!(
            state.observe(&finger(moved, 120.0), inside(), bounds()),
            Some(-30.0)
        );
        assert_eq!(
            state.observe(&finger(moved, 130.0), inside(), bounds()),
            Some(10.0)
        );
    }

    #[test]
    fn given_lifted_finger_when_moving_again_then_nothing_is_reported() {
        let mut state = PreScrollState::default();
        state.observe(&finger(pressed, 150.0), inside(), bounds());
        state.observe(&finger(lifted, 150.0), inside(), bounds());

        assert_eq!(state.observe(&finger(moved, 100.0), inside(), bounds()), None);
    }

    #[test]
    fn given_press_outside_bounds_when_dragging_then_nothing_is_reported() {
        let mut state = PreScrollState::default();
        let press = Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(1),
            position: Point::new(50.0, 400.0),
        });
        state.observe(&press, inside(), bounds());

        assert_eq!(state.observe(&finger(moved, 100.0), inside(), bounds()), None);
    }

    #[test]
    fn given_second_finger_when_moving_then_only_first_finger_is_tracked() {
        let mut state = PreScrollState::default();
        state.observe(&finger(pressed, 150.0), inside(), bounds());
        let other = Event::Touch(touch::Event::FingerMoved {
            id: touch::Finger(2),
            position: Point::new(50.0, 10.0),
        });

        assert_eq!(state.observe(&other, inside(), bounds()), None);
    }

    #[test]
    fn given_capturing_child_when_wheel_scrolls_then_delta_is_published_before_child()
     {
        let mut element: TestElement<'_> =
            pre_scroll(Element::new(Capturing), |_| "pre").into();
        let event = wheel(mouse::ScrollDelta::Pixels { x: 0.0, y: -15.0 });

        let (messages, _) = dispatch(&mut element, &event);

        assert_eq!(messages, vec!["pre", "child"]);
    }

    #[test]
    fn given_passive_child_when_wheel_scrolls_then_event_is_left_uncaptured() {
        let content = Space::new().width(Length::Fill).height(Length::Fill);
        let mut element: TestElement<'_> =
            pre_scroll(content, |_| "pre").into();
        let event = wheel(mouse::ScrollDelta::Pixels { x: 0.0, y: -15.0 });

        let (messages, captured) = dispatch(&mut element, &event);

        assert_eq!(messages, vec!["pre"]);
        assert!(!captured);
    }

    #[test]
    fn given_zero_wheel_delta_when_scrolled_then_nothing_is_published() {
        let content = Space::new().width(Length::Fill).height(Length::Fill);
        let mut element: TestElement<'_> =
            pre_scroll(content, |_| "pre").into();
        let event = wheel(mouse::ScrollDelta::Pixels { x: 3.0, y: 0.0 });

        let (messages, captured) = dispatch(&mut element, &event);

        assert!(messages.is_empty());
        assert!(!captured);
    }
}
