use crate::carousel::{Carousel, SlidePhase};
use crate::config::MotionConfig;
use crate::content::{
    QuickLink, Testimonial, CLIENT_LOGOS, EXPERIENCE, FAQS, NAV_ITEMS, OWNER_INITIALS, OWNER_NAME,
    PROJECTS, QUICK_LINKS, SERVICES, SKILLS, SOCIALS, TESTIMONIALS,
};
use crate::keys::{is_editable_target, KeyBinding, KeyPress, ESCAPE};
use crate::motion::{BoundingBox, HoverMode, Point, PointerTracker};
use crate::palette::{OverlayPresence, PaletteEvent, PaletteState};
use crate::reveal::{stagger_delay_ms, RevealLatch};
use gloo_events::{EventListener, EventListenerOptions};
use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::{Interval, Timeout};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    window, Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, MouseEvent, Node, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, SubmitEvent,
};
use yew::prelude::*;

const FALLBACK_VIEWPORT: (f64, f64) = (1280.0, 720.0);
// Reveal slightly before the element is fully on screen.
const REVEAL_ROOT_MARGIN: &str = "0px 0px -80px 0px";

fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return FALLBACK_VIEWPORT;
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.1);

    (width, height)
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn measure(element: &Element) -> Option<BoundingBox> {
    if !element.is_connected() {
        return None;
    }

    let rect = element.get_bounding_client_rect();
    BoundingBox::new(rect.left(), rect.top(), rect.width(), rect.height())
}

fn scroll_to(id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn key_press(event: &KeyboardEvent) -> KeyPress {
    let editable = event
        .target()
        .and_then(|target| target.dyn_into::<HtmlElement>().ok())
        .map(|element| is_editable_target(&element.tag_name(), element.is_content_editable()))
        .unwrap_or(false);

    KeyPress::new(&event.key(), &event.code()).in_editable(editable)
}

/// Keeps one window `keydown` listener alive while the calling component is
/// mounted. The handler is read on every press, so callers may pass a fresh
/// callback each render without re-registering.
#[hook]
fn use_key(binding: KeyBinding, handler: Callback<()>) {
    let latest = use_mut_ref(|| handler.clone());
    *latest.borrow_mut() = handler;

    use_effect_with(binding, move |binding| {
        let binding = binding.clone();
        let listener = window().map(|win| {
            EventListener::new_with_options(
                &win,
                "keydown",
                EventListenerOptions::enable_prevent_default(),
                move |event: &Event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if !binding.matches(&key_press(event)) {
                        return;
                    }

                    event.prevent_default();
                    let handler = latest.borrow().clone();
                    handler.emit(());
                },
            )
        });

        move || drop(listener)
    });
}

struct CursorLoop {
    node: NodeRef,
    tracker: RefCell<PointerTracker>,
    frame: RefCell<Option<AnimationFrame>>,
}

impl CursorLoop {
    fn schedule(self: &Rc<Self>) {
        let cursor = Rc::clone(self);
        let handle = request_animation_frame(move |_| cursor.on_frame());
        *self.frame.borrow_mut() = Some(handle);
    }

    fn on_frame(self: &Rc<Self>) {
        let transform = {
            let mut tracker = self.tracker.borrow_mut();
            tracker.step();
            tracker.to_css()
        };

        if let Some(element) = self.node.cast::<HtmlElement>() {
            let _ = element.style().set_property("transform", &transform);
        }

        self.schedule();
    }
}

/// Owns the frame loop and pointer listener of a mounted cursor dot. Dropping
/// it cancels the pending frame and detaches the listener.
struct CursorHandle {
    cursor: Rc<CursorLoop>,
    _pointer: EventListener,
}

impl CursorHandle {
    fn start(node: NodeRef, smoothing: f64) -> Option<Self> {
        let win = window()?;
        let (width, height) = viewport_size();
        let cursor = Rc::new(CursorLoop {
            node,
            tracker: RefCell::new(PointerTracker::centered_in(width, height, smoothing)),
            frame: RefCell::new(None),
        });

        let pointer = {
            let cursor = Rc::clone(&cursor);
            EventListener::new(&win, "mousemove", move |event: &Event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    cursor.tracker.borrow_mut().set_target(Point::new(
                        f64::from(event.client_x()),
                        f64::from(event.client_y()),
                    ));
                }
            })
        };

        cursor.schedule();
        log::debug!("cursor follower started");

        Some(Self {
            cursor,
            _pointer: pointer,
        })
    }
}

impl Drop for CursorHandle {
    fn drop(&mut self) {
        self.cursor.frame.borrow_mut().take();
        log::debug!("cursor follower stopped");
    }
}

#[derive(Properties, PartialEq)]
struct CursorDotProps {
    smoothing: f64,
}

#[function_component(CursorDot)]
fn cursor_dot(props: &CursorDotProps) -> Html {
    let node = use_node_ref();
    let reduced_motion = use_memo((), |_| prefers_reduced_motion());

    {
        let node = node.clone();
        let enabled = !*reduced_motion;
        use_effect_with((enabled, props.smoothing), move |&(enabled, smoothing)| {
            let handle = enabled.then(|| CursorHandle::start(node, smoothing)).flatten();
            move || drop(handle)
        });
    }

    if *reduced_motion {
        return html! {};
    }

    html! { <div ref={node} class="cursor-dot" aria-hidden="true"></div> }
}

#[derive(Properties, PartialEq)]
struct HoverSurfaceProps {
    mode: HoverMode,
    perspective_px: f64,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    children: Html,
}

#[function_component(HoverSurface)]
fn hover_surface(props: &HoverSurfaceProps) -> Html {
    let node = use_node_ref();
    let transform = use_state_eq(|| props.mode.neutral());
    let reduced_motion = use_memo((), |_| prefers_reduced_motion());

    let onmousemove = {
        let node = node.clone();
        let transform = transform.clone();
        let mode = props.mode;
        let enabled = !*reduced_motion;
        Callback::from(move |event: MouseEvent| {
            if !enabled {
                return;
            }
            let bounds = node.cast::<Element>().as_ref().and_then(measure);
            let pointer = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
            if let Some(next) = mode.on_move(pointer, bounds) {
                transform.set(next);
            }
        })
    };

    let onmouseleave = {
        let transform = transform.clone();
        let mode = props.mode;
        Callback::from(move |_: MouseEvent| transform.set(mode.neutral()))
    };

    let style = format!("transform: {};", transform.to_css(props.perspective_px));

    html! {
        <div
            ref={node}
            class={props.class.clone()}
            style={style}
            onmousemove={onmousemove}
            onmouseleave={onmouseleave}
        >
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct MotionChildProps {
    config: MotionConfig,
    #[prop_or_default]
    children: Html,
}

#[function_component(Magnetic)]
fn magnetic(props: &MotionChildProps) -> Html {
    html! {
        <HoverSurface
            mode={HoverMode::magnetic(&props.config)}
            perspective_px={props.config.tilt_perspective_px}
            class={classes!("magnetic")}
        >
            {props.children.clone()}
        </HoverSurface>
    }
}

#[function_component(TiltCard)]
fn tilt_card(props: &MotionChildProps) -> Html {
    html! {
        <HoverSurface
            mode={HoverMode::tilt(&props.config)}
            perspective_px={props.config.tilt_perspective_px}
            class={classes!("tilt-card")}
        >
            {props.children.clone()}
        </HoverSurface>
    }
}

type RevealCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Watches one element until it first intersects the viewport. Dropping it
/// disconnects the observer.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: RevealCallback,
}

impl RevealObserver {
    fn start(target: &Element, on_reveal: impl FnOnce() + 'static) -> Option<Self> {
        let mut latch = RevealLatch::default();
        let mut on_reveal = Some(on_reveal);
        let callback = RevealCallback::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if !latch.observe(intersecting) {
                return;
            }

            observer.disconnect();
            if let Some(on_reveal) = on_reveal.take() {
                on_reveal();
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                Ok(observer) => observer,
                Err(err) => {
                    log::warn!("intersection observer unavailable: {err:?}");
                    return None;
                }
            };
        observer.observe(target);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Whether the element behind `node` has been scrolled into view yet. Starts
/// visible under reduced motion or when the element cannot be observed.
#[hook]
fn use_reveal(node: NodeRef) -> bool {
    let visible = use_state_eq(prefers_reduced_motion);

    {
        let setter = visible.setter();
        let revealed = *visible;
        use_effect_with(node, move |node| {
            let observer = if revealed {
                None
            } else {
                let on_reveal = setter.clone();
                let observer = node
                    .cast::<Element>()
                    .and_then(|element| RevealObserver::start(&element, move || on_reveal.set(true)));
                if observer.is_none() {
                    setter.set(true);
                }
                observer
            };
            move || drop(observer)
        });
    }

    *visible
}

#[derive(Properties, PartialEq)]
struct RevealProps {
    #[prop_or_default]
    delay_ms: u32,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    children: Html,
}

#[function_component(Reveal)]
fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());
    let style = format!("transition-delay: {}ms;", props.delay_ms);

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), visible.then_some("is-visible"))}
            style={style}
        >
            { props.children.clone() }
        </div>
    }
}

impl Reducible for PaletteState {
    type Action = PaletteEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            return self;
        }

        log::debug!("command palette {:?} -> {next:?} on {action:?}", *self);
        Rc::new(next)
    }
}

enum PresenceAction {
    Follow(PaletteState),
    ExitFinished,
}

impl Reducible for OverlayPresence {
    type Action = PresenceAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            PresenceAction::Follow(state) => self.follow(state),
            PresenceAction::ExitFinished => self.exit_finished(),
        };

        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
struct CommandPaletteProps {
    state: PaletteState,
    on_event: Callback<PaletteEvent>,
    links: &'static [QuickLink],
    exit_ms: u32,
    toggle_key: AttrValue,
}

#[function_component(CommandPalette)]
fn command_palette(props: &CommandPaletteProps) -> Html {
    let presence = use_reducer_eq(OverlayPresence::default);
    let panel = use_node_ref();

    {
        let on_event = props.on_event.clone();
        use_key(
            KeyBinding::new(ESCAPE),
            Callback::from(move |_| on_event.emit(PaletteEvent::Escape)),
        );
    }

    {
        let dispatcher = presence.dispatcher();
        use_effect_with((props.state, props.exit_ms), move |&(state, exit_ms)| {
            dispatcher.dispatch(PresenceAction::Follow(state));
            let exit_timer = (!state.is_open()).then(|| {
                Timeout::new(exit_ms, move || {
                    dispatcher.dispatch(PresenceAction::ExitFinished)
                })
            });
            move || drop(exit_timer)
        });
    }

    if !presence.is_rendered() {
        return html! {};
    }

    let interactive = presence.is_interactive();
    let inert = (!interactive).then_some("");
    let duration = format!("animation-duration: {}ms;", props.exit_ms);

    let on_backdrop = {
        let on_event = props.on_event.clone();
        let panel = panel.clone();
        Callback::from(move |event: MouseEvent| {
            let inside_panel = panel
                .get()
                .zip(event.target().and_then(|target| target.dyn_into::<Node>().ok()))
                .map(|(panel, target)| panel.contains(Some(&target)))
                .unwrap_or(false);
            on_event.emit(PaletteEvent::for_click(inside_panel));
        })
    };

    let on_link = {
        let on_event = props.on_event.clone();
        Callback::from(move |_: MouseEvent| on_event.emit(PaletteEvent::Close))
    };

    html! {
        <div
            class={classes!("palette-backdrop", (!interactive).then_some("is-leaving"))}
            style={duration.clone()}
            onclick={on_backdrop}
            inert={inert}
        >
            <div
                ref={panel}
                class="palette-panel"
                style={duration}
                role="dialog"
                aria-modal="true"
                aria-label="Quick actions"
            >
                <p class="palette-hint">
                    {"Quick actions (press "}<kbd>{props.toggle_key.to_uppercase()}</kbd>{" to toggle)"}
                </p>
                <ul class="palette-links">
                    { for props.links.iter().map(|link| html! {
                        <li>
                            <a
                                href={link.href}
                                target={link.new_tab.then_some("_blank")}
                                rel={link.new_tab.then_some("noopener noreferrer")}
                                onclick={on_link.clone()}
                            >
                                <span>{link.label}</span>
                                <span class="external-mark" aria-hidden="true">{"↗"}</span>
                            </a>
                        </li>
                    }) }
                </ul>
            </div>
        </div>
    }
}

enum CarouselAction {
    Tick,
    Select(usize),
    Resize(usize),
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            CarouselAction::Tick => {
                next.tick();
            }
            CarouselAction::Select(index) => {
                if !next.select(index) {
                    log::trace!("ignoring out-of-range testimonial {index}");
                }
            }
            CarouselAction::Resize(len) => next.resize(len),
        }

        if next == *self {
            return self;
        }

        log::trace!("testimonial {} -> {}", self.index(), next.index());
        Rc::new(next)
    }
}

enum SlideAction {
    Follow(usize),
    ExitFinished,
}

impl Reducible for SlidePhase {
    type Action = SlideAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            SlideAction::Follow(index) => self.follow(index),
            SlideAction::ExitFinished => self.exit_finished(),
        };

        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
struct TestimonialCarouselProps {
    items: &'static [Testimonial],
    interval_ms: u32,
    exit_ms: u32,
}

#[function_component(TestimonialCarousel)]
fn testimonial_carousel(props: &TestimonialCarouselProps) -> Html {
    let len = props.items.len();
    let carousel = use_reducer_eq(move || Carousel::new(len));

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with((len, props.interval_ms), move |&(len, interval_ms)| {
            dispatcher.dispatch(CarouselAction::Resize(len));
            let ticker = Carousel::new(len).should_run().then(|| {
                Interval::new(interval_ms, move || dispatcher.dispatch(CarouselAction::Tick))
            });
            move || drop(ticker)
        });
    }

    let phase = use_reducer_eq(|| SlidePhase::Showing(0));

    {
        let dispatcher = phase.dispatcher();
        use_effect_with((carousel.index(), props.exit_ms), move |&(index, exit_ms)| {
            dispatcher.dispatch(SlideAction::Follow(index));
            let done = Timeout::new(exit_ms, move || dispatcher.dispatch(SlideAction::ExitFinished));
            move || drop(done)
        });
    }

    let index = carousel.index();
    let shown = phase.displayed();
    let Some(current) = props.items.get(shown) else {
        return html! {};
    };
    let duration = format!("animation-duration: {}ms;", props.exit_ms);

    html! {
        <div class="carousel">
            <figure
                key={shown}
                class={classes!("carousel-slide", phase.is_leaving().then_some("is-leaving"))}
                style={duration}
            >
                <blockquote>{format!("“{}”", current.quote)}</blockquote>
                <figcaption class="muted">{format!("— {}, {}", current.name, current.role)}</figcaption>
            </figure>
            <div class="carousel-dots">
                { for (0..len).map(|idx| {
                    let dispatcher = carousel.dispatcher();
                    let onclick = Callback::from(move |_: MouseEvent| {
                        dispatcher.dispatch(CarouselAction::Select(idx))
                    });
                    html! {
                        <button
                            type="button"
                            class={classes!("carousel-dot", (idx == index).then_some("is-active"))}
                            aria-label={format!("Go to testimonial {}", idx + 1)}
                            aria-current={(idx == index).then_some("true")}
                            onclick={onclick}
                        ></button>
                    }
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: MotionConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = &props.config;
    let palette = use_reducer_eq(PaletteState::default);

    {
        let dispatcher = palette.dispatcher();
        use_key(
            KeyBinding::new(&config.palette_toggle_key).outside_editable(),
            Callback::from(move |_| dispatcher.dispatch(PaletteEvent::Toggle)),
        );
    }

    let on_palette_event = {
        let dispatcher = palette.dispatcher();
        Callback::from(move |event: PaletteEvent| dispatcher.dispatch(event))
    };

    let on_contact_submit = Callback::from(|event: SubmitEvent| {
        event.prevent_default();
        if let Some(win) = window() {
            let _ = win.location().set_href(SOCIALS.email);
        }
    });

    html! {
        <main class="page">
            <CursorDot smoothing={config.smoothing_factor} />
            <CommandPalette
                state={*palette}
                on_event={on_palette_event}
                links={QUICK_LINKS}
                exit_ms={config.palette_exit_ms}
                toggle_key={AttrValue::from(config.palette_toggle_key.clone())}
            />
            <div class="backdrop-glow" aria-hidden="true"></div>
            <div class="backdrop-grid" aria-hidden="true"></div>

            <header class="site-header">
                <div class="site-header-inner">
                    <span class="monogram">{OWNER_INITIALS}</span>
                    <nav class="site-nav">
                        { for NAV_ITEMS.iter().map(|item| {
                            let id = item.id;
                            html! {
                                <button type="button" onclick={Callback::from(move |_: MouseEvent| scroll_to(id))}>
                                    {item.label}
                                </button>
                            }
                        }) }
                    </nav>
                    <Magnetic config={config.clone()}>
                        <a class="button-primary" href={SOCIALS.resume} download="">{"Download Résumé"}</a>
                    </Magnetic>
                </div>
            </header>

            <section class="hero section">
                <h1>{format!("Hi, I'm {OWNER_NAME}.")}</h1>
                <p class="lead">{"I design and ship products end to end: web apps, AI tooling, and the automation behind them."}</p>
                <div class="hero-actions">
                    <button type="button" class="button-primary" onclick={Callback::from(|_: MouseEvent| scroll_to("work"))}>
                        {"See my work"}
                    </button>
                    <a class="button-ghost" href={SOCIALS.whatsapp} target="_blank" rel="noopener noreferrer">{"WhatsApp"}</a>
                </div>
                <ul class="logo-strip" aria-label="Teams I've worked with">
                    { for CLIENT_LOGOS.iter().map(|logo| html! { <li>{*logo}</li> }) }
                </ul>
            </section>

            <section id="about" class="section">
                <Reveal><h2>{"About"}</h2></Reveal>
                <p class="muted">{"Product-focused developer who likes small teams, short feedback loops, and measurable outcomes."}</p>
                <ul class="chip-list">
                    { for SKILLS.iter().map(|skill| html! { <li class="chip">{*skill}</li> }) }
                </ul>
            </section>

            <section id="experience" class="section">
                <Reveal><h2>{"Experience"}</h2></Reveal>
                <ol class="timeline">
                    { for EXPERIENCE.iter().enumerate().map(|(idx, role)| html! {
                        <li class="timeline-item">
                            <Reveal delay_ms={stagger_delay_ms(idx, config.reveal_stagger_ms)}>
                                <div class="timeline-head">
                                    <h3>{role.role}</h3>
                                    <span class="muted">{role.period}</span>
                                </div>
                                <ul>
                                    { for role.points.iter().map(|point| html! { <li>{*point}</li> }) }
                                </ul>
                            </Reveal>
                        </li>
                    }) }
                </ol>
            </section>

            <section id="work" class="section">
                <Reveal><h2>{"My Work"}</h2></Reveal>
                <p class="muted">{"A few past projects. Click to open."}</p>
                <div class="project-grid">
                    { for PROJECTS.iter().enumerate().map(|(idx, project)| html! {
                        <Reveal delay_ms={stagger_delay_ms(idx, config.reveal_stagger_ms)}>
                            <TiltCard config={config.clone()}>
                                <a class="project-card" href={project.link} target="_blank" rel="noopener noreferrer">
                                    <img src={project.image} alt={project.title} loading="lazy" />
                                    <div class="project-copy">
                                        <h3>{project.title}</h3>
                                        <p class="muted">{project.description}</p>
                                        <ul class="chip-list">
                                            { for project.tags.iter().map(|tag| html! { <li class="chip">{*tag}</li> }) }
                                        </ul>
                                    </div>
                                </a>
                            </TiltCard>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="section" aria-labelledby="testimonials-heading">
                <Reveal><h2 id="testimonials-heading">{"Testimonials"}</h2></Reveal>
                <TestimonialCarousel
                    items={TESTIMONIALS}
                    interval_ms={config.carousel_interval_ms}
                    exit_ms={config.slide_exit_ms}
                />
            </section>

            <section id="services" class="section">
                <Reveal><h2>{"Services"}</h2></Reveal>
                <div class="service-grid">
                    { for SERVICES.iter().enumerate().map(|(idx, service)| html! {
                        <Reveal delay_ms={stagger_delay_ms(idx, config.reveal_stagger_ms)}>
                            <article class="service-card">
                                <h3>{service.title}</h3>
                                <p class="muted">{service.blurb}</p>
                            </article>
                        </Reveal>
                    }) }
                </div>
                <h3 class="faq-heading">{"FAQ"}</h3>
                { for FAQS.iter().map(|faq| html! {
                    <details class="faq">
                        <summary>{faq.question}</summary>
                        <p class="muted">{faq.answer}</p>
                    </details>
                }) }
            </section>

            <section id="contact" class="section">
                <Reveal><h2>{"Contact Me"}</h2></Reveal>
                <Reveal class="contact-grid">
                    <form class="contact-form" onsubmit={on_contact_submit}>
                        <label for="contact-name">{"Name"}</label>
                        <input id="contact-name" placeholder="Your name" />
                        <label for="contact-email">{"Email"}</label>
                        <input id="contact-email" type="email" placeholder="you@example.com" />
                        <label for="contact-message">{"Message"}</label>
                        <textarea id="contact-message" rows="5" placeholder="Tell me about your project…" />
                        <button type="submit" class="button-primary">{"Send Message"}</button>
                    </form>
                    <div class="contact-aside">
                        <h3>{"Prefer quick chat?"}</h3>
                        <ul>
                            <li><a href={SOCIALS.email}>{"Email"}</a></li>
                            <li><a href={SOCIALS.phone}>{"Call"}</a></li>
                            <li><a href={SOCIALS.github} target="_blank" rel="noopener noreferrer">{"GitHub"}</a></li>
                            <li><a href={SOCIALS.youtube} target="_blank" rel="noopener noreferrer">{"YouTube"}</a></li>
                        </ul>
                    </div>
                </Reveal>
            </section>
        </main>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Trace).ok();

    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
        .expect("missing #app mount point");

    let config = MotionConfig::from_overrides(root.get_attribute("data-motion").as_deref());
    log::set_max_level(config.log_level);
    log::info!("portfolio starting");

    yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();
}
