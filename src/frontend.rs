use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use fastrand::Rng;
use gloo_timers::callback::{Interval, Timeout};
use js_sys::{Array, Function, Promise, Reflect};
use serde_json::json;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    window, AddEventListenerOptions, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, MouseEvent, Window,
};
use yew::prelude::*;

use crate::{
    clipboard::{confirmation_label, CopyConfirmation, CONTACT_EMAIL, COPY_CONFIRMATION_MS},
    content::{
        copyright_line, marquee_sequence, project_reveal_delay, ContactAction, ContactChannel,
        PillTag, Project, AVAILABILITY_BADGE, AVATAR_URL, CONTACT_CHANNELS, CORE_STACK,
        GITHUB_URL, GRAIN_TEXTURE_URL, LOGO_PATH, OWNER_NAME, PROJECTS, SHIPPED_COUNT,
        SHIPPED_LABEL, SKILLS_HEADING,
    },
    geometry::{Point, Rect},
    icons::Icon,
    magnetic::{attraction, link_target, translate_style},
    reveal::{transition_delay_style, Reveal, REVEAL_THRESHOLD},
    scramble::{Scramble, SCRAMBLE_TICK_MS},
    spotlight::Spotlight,
    telemetry::{log_event, LogLevel},
    tracker::{pointer_tracking_enabled, FrameCoalescer, Viewport, POINTER_MEDIA_QUERY},
};

pub enum ViewportAction {
    Scrolled(f64),
    PointerMoved(Point),
    PointerTracking(bool),
}

impl Reducible for Viewport {
    type Action = ViewportAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            ViewportAction::Scrolled(scroll_y) => self.with_scroll(scroll_y),
            ViewportAction::PointerMoved(pointer) => self.with_pointer(pointer),
            ViewportAction::PointerTracking(tracks_pointer) => Viewport {
                tracks_pointer,
                ..*self
            },
        };

        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

pub enum SpotlightAction {
    Enter,
    Leave,
    Track(Rect, Point),
}

impl Reducible for Spotlight {
    type Action = SpotlightAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            SpotlightAction::Enter => next.enter(),
            SpotlightAction::Leave => next.leave(),
            SpotlightAction::Track(container, pointer) => next.track(container, pointer),
        }
        Rc::new(next)
    }
}

fn pointer_media_matches() -> bool {
    let Some(window) = window() else {
        return false;
    };

    match window.match_media(POINTER_MEDIA_QUERY).ok().flatten() {
        Some(mq) => mq.matches(),
        None => window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .map(pointer_tracking_enabled)
            .unwrap_or(false),
    }
}

fn current_scroll_y() -> Option<f64> {
    window()?.scroll_y().ok()
}

fn element_rect(node: &NodeRef) -> Option<Rect> {
    node.cast::<Element>()
        .map(|element| Rect::from(element.get_bounding_client_rect()))
}

/// Passive window `scroll` listener, detached on drop.
struct ScrollSubscription {
    window: Window,
    on_scroll: Closure<dyn FnMut()>,
}

impl ScrollSubscription {
    fn attach(dispatcher: UseReducerDispatcher<Viewport>) -> Option<Self> {
        let window = window()?;
        let on_scroll = Closure::<dyn FnMut()>::new(move || {
            if let Some(scroll_y) = current_scroll_y() {
                dispatcher.dispatch(ViewportAction::Scrolled(scroll_y));
            }
        });

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                on_scroll.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;

        Some(Self { window, on_scroll })
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
    }
}

/// Window `mousemove` listener committing at most one position per frame.
struct PointerSubscription {
    window: Window,
    on_move: Closure<dyn FnMut(MouseEvent)>,
    frame_id: Rc<Cell<Option<i32>>>,
}

impl PointerSubscription {
    fn attach(dispatcher: UseReducerDispatcher<Viewport>) -> Option<Self> {
        let window = window()?;
        let coalescer = Rc::new(RefCell::new(FrameCoalescer::<Point>::default()));
        let frame_id = Rc::new(Cell::new(None));

        let on_frame = {
            let coalescer = coalescer.clone();
            let frame_id = frame_id.clone();
            let dispatcher = dispatcher.clone();
            Rc::new(Closure::<dyn FnMut()>::new(move || {
                frame_id.set(None);
                if let Some(pointer) = coalescer.borrow_mut().take() {
                    dispatcher.dispatch(ViewportAction::PointerMoved(pointer));
                }
            }))
        };

        let on_move = {
            let window = window.clone();
            let frame_id = frame_id.clone();
            Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let pointer = Point::from_client(event.client_x(), event.client_y());
                if !coalescer.borrow_mut().push(pointer) {
                    return;
                }

                let frame_callback: &Closure<dyn FnMut()> = &on_frame;
                match window.request_animation_frame(frame_callback.as_ref().unchecked_ref()) {
                    Ok(id) => frame_id.set(Some(id)),
                    // No frame coming: commit right away instead of stalling.
                    Err(_) => {
                        if let Some(pointer) = coalescer.borrow_mut().take() {
                            dispatcher.dispatch(ViewportAction::PointerMoved(pointer));
                        }
                    }
                }
            })
        };

        window
            .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            window,
            on_move,
            frame_id,
        })
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("mousemove", self.on_move.as_ref().unchecked_ref());
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}

type RevealCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe_reveal(
    node: &NodeRef,
    reveal: UseStateSetter<Reveal>,
) -> Option<(IntersectionObserver, RevealCallback)> {
    let element = node.cast::<Element>()?;

    let callback = RevealCallback::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                reveal.set(Reveal::from_ratio(entry.intersection_ratio()));
            }
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(_) => {
                log_event(LogLevel::Warn, "reveal_observer_unavailable", json!({}));
                return None;
            }
        };
    observer.observe(&element);

    Some((observer, callback))
}

/// Fire-and-forget `navigator.clipboard.writeText`. Failures only reach the
/// debug log.
fn write_to_clipboard(text: &str) {
    let Some(navigator) = window().map(|w| w.navigator()) else {
        return;
    };

    let navigator_js: JsValue = navigator.into();
    let clipboard = Reflect::get(&navigator_js, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null());
    let Some(clipboard) = clipboard else {
        log_event(LogLevel::Debug, "clipboard_unavailable", json!({}));
        return;
    };

    let Ok(write_text) = Reflect::get(&clipboard, &JsValue::from_str("writeText")) else {
        log_event(LogLevel::Debug, "clipboard_unavailable", json!({}));
        return;
    };
    let Some(write_text) = write_text.dyn_ref::<Function>() else {
        log_event(LogLevel::Debug, "clipboard_unavailable", json!({}));
        return;
    };

    let pending = match write_text.call1(&clipboard, &JsValue::from_str(text)) {
        Ok(value) => value,
        Err(_) => {
            log_event(LogLevel::Debug, "clipboard_write_failed", json!({ "stage": "call" }));
            return;
        }
    };

    if let Ok(promise) = pending.dyn_into::<Promise>() {
        spawn_local(async move {
            if JsFuture::from(promise).await.is_err() {
                log_event(
                    LogLevel::Debug,
                    "clipboard_write_failed",
                    json!({ "stage": "promise" }),
                );
            }
        });
    }
}

#[derive(Properties, PartialEq)]
pub struct IconGlyphProps {
    pub icon: Icon,
    #[prop_or(18)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconGlyph)]
pub fn icon_glyph(props: &IconGlyphProps) -> Html {
    let size = props.size.to_string();

    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.icon.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrambleTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ScrambleText)]
pub fn scramble_text(props: &ScrambleTextProps) -> Html {
    let display = {
        let text = props.text.clone();
        use_state(move || Scramble::new(&text).frame(&mut Rng::new()))
    };
    let scramble = {
        let text = props.text.clone();
        use_mut_ref(move || Scramble::new(&text))
    };
    let interval = use_mut_ref(|| Option::<Interval>::None);

    {
        let display = display.clone();
        let interval = interval.clone();
        use_effect_with(props.text.clone(), move |text| {
            let mut rng = Rng::new();
            scramble.borrow_mut().restart(text);
            display.set(scramble.borrow().frame(&mut rng));

            if !scramble.borrow().is_finished() {
                let slot = interval.clone();
                let tick = Interval::new(SCRAMBLE_TICK_MS, move || {
                    let mut scramble = scramble.borrow_mut();
                    let running = scramble.advance();
                    display.set(scramble.frame(&mut rng));
                    if !running {
                        slot.borrow_mut().take();
                    }
                });
                *interval.borrow_mut() = Some(tick);
            }

            move || {
                interval.borrow_mut().take();
            }
        });
    }

    html! {
        <span class={props.class.clone()}>{(*display).clone()}</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub delay: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let reveal = use_state(Reveal::default);

    {
        let node = node.clone();
        let setter = reveal.setter();
        use_effect_with((), move |_| {
            let subscription = observe_reveal(&node, setter);
            move || {
                if let Some((observer, _callback)) = subscription {
                    observer.disconnect();
                }
            }
        });
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", (*reveal).class(), props.class.clone())}
            style={transition_delay_style(props.delay)}
        >
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub primary: bool,
    #[prop_or_default]
    pub icon: Option<Icon>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let node = use_node_ref();
    let offset = use_state(|| Point::ORIGIN);

    let onmousemove = {
        let node = node.clone();
        let offset = offset.clone();
        Callback::from(move |event: MouseEvent| {
            if let Some(bounds) = element_rect(&node) {
                let pointer = Point::from_client(event.client_x(), event.client_y());
                offset.set(attraction(bounds, pointer));
            }
        })
    };

    let onmouseleave = {
        let offset = offset.clone();
        Callback::from(move |_| offset.set(Point::ORIGIN))
    };

    let variant = if props.primary {
        "magnetic-primary"
    } else {
        "magnetic-secondary"
    };

    html! {
        <a
            ref={node}
            class={classes!("magnetic", variant)}
            href={props.href.clone()}
            target={link_target(&props.href)}
            rel="noreferrer"
            style={translate_style(*offset)}
            onmousemove={onmousemove}
            onmouseleave={onmouseleave}
        >
            if props.primary {
                <div class="magnetic-shimmer"></div>
            }
            <span class="magnetic-label">
                if let Some(icon) = props.icon {
                    <IconGlyph icon={icon} class={classes!("magnetic-icon")} />
                }
                {props.children.clone()}
            </span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct SpotlightCardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(SpotlightCard)]
pub fn spotlight_card(props: &SpotlightCardProps) -> Html {
    let node = use_node_ref();
    let spotlight = use_reducer(Spotlight::default);

    let onmousemove = {
        let node = node.clone();
        let spotlight = spotlight.dispatcher();
        Callback::from(move |event: MouseEvent| {
            if let Some(container) = element_rect(&node) {
                let pointer = Point::from_client(event.client_x(), event.client_y());
                spotlight.dispatch(SpotlightAction::Track(container, pointer));
            }
        })
    };

    let onmouseenter = {
        let spotlight = spotlight.dispatcher();
        Callback::from(move |_| spotlight.dispatch(SpotlightAction::Enter))
    };

    let onmouseleave = {
        let spotlight = spotlight.dispatcher();
        Callback::from(move |_| spotlight.dispatch(SpotlightAction::Leave))
    };

    html! {
        <div
            ref={node}
            class={classes!("spotlight-card", props.class.clone())}
            onmousemove={onmousemove}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            <div class="spotlight-layer" style={spotlight.style()}></div>
            {props.children.clone()}
        </div>
    }
}

#[function_component(PillTagView)]
fn pill_tag_view(props: &PillTagViewProps) -> Html {
    html! {
        <div class="pill-tag">
            <IconGlyph icon={props.tag.icon} size={14} class={classes!("pill-icon")} />
            <span>{props.tag.text}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PillTagViewProps {
    tag: PillTag,
}

#[function_component(CopyEmailCard)]
pub fn copy_email_card() -> Html {
    let copied = use_state(|| false);
    let confirmation = use_mut_ref(CopyConfirmation::<Timeout>::default);

    {
        let confirmation = confirmation.clone();
        use_effect_with((), move |_| {
            move || confirmation.borrow_mut().clear()
        });
    }

    let onclick = {
        let copied = copied.clone();
        let confirmation = confirmation.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            write_to_clipboard(CONTACT_EMAIL);

            let revert = {
                let copied = copied.clone();
                let confirmation = confirmation.clone();
                Timeout::new(COPY_CONFIRMATION_MS, move || {
                    let mut confirmation = confirmation.borrow_mut();
                    confirmation.expire();
                    copied.set(confirmation.is_copied());
                })
            };
            let mut state = confirmation.borrow_mut();
            state.activate(revert);
            copied.set(state.is_copied());
            drop(state);
            log_event(LogLevel::Info, "contact_email_copied", json!({}));
        })
    };

    html! {
        <button
            type="button"
            class={classes!("contact-card", "tone-indigo", (*copied).then_some("is-copied"))}
            onclick={onclick}
        >
            <div class="contact-icon-wrap">
                <div class="contact-copied-halo"></div>
                <div class="contact-icon">
                    if *copied {
                        <IconGlyph icon={Icon::Check} size={24} class={classes!("contact-check")} />
                    } else {
                        <IconGlyph icon={Icon::Mail} size={24} />
                    }
                </div>
            </div>
            <div class="contact-copy">
                <div class="contact-label">{"Email"}</div>
                <div class="contact-handle">{confirmation_label(*copied)}</div>
            </div>
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct ContactLinkProps {
    channel: ContactChannel,
}

#[function_component(ContactLink)]
fn contact_link(props: &ContactLinkProps) -> Html {
    let channel = props.channel;
    let ContactAction::Open(href) = channel.action else {
        return html! { <CopyEmailCard /> };
    };

    html! {
        <a
            class={classes!("contact-card", channel.tone)}
            href={href}
            target="_blank"
            rel="noreferrer"
        >
            <div class="contact-icon">
                <IconGlyph icon={channel.icon} size={24} />
            </div>
            <div class="contact-copy">
                <div class="contact-label">{channel.label}</div>
                <div class="contact-handle">{channel.handle}</div>
            </div>
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;

    html! {
        <SpotlightCard class={classes!("project-card")}>
            <div class="project-body">
                <div class={classes!("project-glow", project.glow)}></div>
                <div class="project-content">
                    <div class="project-header">
                        <div class="project-badge">
                            <IconGlyph icon={Icon::Globe} size={26} class={classes!(project.accent)} />
                        </div>
                        <a class="project-link" href={project.url} target="_blank" rel="noreferrer">
                            <IconGlyph icon={Icon::ExternalLink} size={20} />
                            <span class="sr-only">{format!("Open {}", project.title)}</span>
                        </a>
                    </div>
                    <h3 class="project-title">{project.title}</h3>
                    <p class="project-description">{project.description}</p>
                    <div class="project-tags">
                        { for project.tags.iter().map(|tag| html! {
                            <span key={*tag} class="project-tag">{*tag}</span>
                        }) }
                    </div>
                </div>
            </div>
        </SpotlightCard>
    }
}

#[function_component(ParallaxBackground)]
fn parallax_background() -> Html {
    let viewport = use_context::<Viewport>().unwrap_or_default();

    html! {
        <div class="backdrop" aria-hidden="true">
            <div class="backdrop-grid" style={viewport.grid_style()}></div>
            <div class="backdrop-top-light"></div>
            if viewport.tracks_pointer {
                <div class="backdrop-glow" style={viewport.glow_style()}></div>
            }
        </div>
    }
}

#[function_component(NavBar)]
fn nav_bar() -> Html {
    let viewport = use_context::<Viewport>().unwrap_or_default();

    html! {
        <nav class={classes!("site-nav", viewport.nav_class())}>
            <div class="site-nav-pill">
                <a href="#" class="site-nav-logo">
                    <div class="site-nav-avatar">
                        <img src={LOGO_PATH} alt="Logo" />
                    </div>
                    <div class="site-nav-status"></div>
                </a>
                <div class="site-nav-links">
                    <a href="#about">{"About"}</a>
                    <a href="#projects">{"Projects"}</a>
                    <a href="#skills">{"Stack"}</a>
                </div>
                <a href="#contact" class="site-nav-cta">{"Let's Talk"}</a>
            </div>
        </nav>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <FadeIn delay={100}>
                <div class="hero-portrait">
                    <div class="hero-portrait-halo"></div>
                    <div class="hero-portrait-frame">
                        <img src={AVATAR_URL} alt={OWNER_NAME} />
                    </div>
                    <div class="hero-badge">
                        <span class="hero-badge-dot">
                            <span class="hero-badge-ping"></span>
                            <span class="hero-badge-core"></span>
                        </span>
                        <ScrambleText text={AVAILABILITY_BADGE} class={classes!("hero-badge-text")} />
                    </div>
                </div>
            </FadeIn>

            <FadeIn delay={200}>
                <h1 class="hero-title">
                    <span class="hero-title-lead">{"Designing the"}</span>{" "}
                    <br class="desktop-only" />
                    <span>{"Future"}</span>
                    <span class="hero-title-sub">{"with Code & AI."}</span>
                </h1>
            </FadeIn>

            <FadeIn delay={300}>
                <p class="hero-intro">
                    {format!("I'm {OWNER_NAME}. A Full Stack Developer & AI Specialist. I build ")}
                    <span class="hero-intro-accent">{"liquid-smooth"}</span>
                    {" digital experiences."}
                </p>
            </FadeIn>

            <FadeIn delay={400} class={classes!("hero-actions")}>
                <MagneticButton primary={true} href="#projects">
                    {"View My Work "}
                    <IconGlyph icon={Icon::ArrowRight} />
                </MagneticButton>
                <MagneticButton href={GITHUB_URL} icon={Icon::Github}>
                    {"GitHub"}
                </MagneticButton>
            </FadeIn>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id="about" class="section about">
            <div class="about-grid">
                <FadeIn delay={0} class={classes!("about-story-cell")}>
                    <SpotlightCard class={classes!("about-story")}>
                        <div class="about-icon">
                            <IconGlyph icon={Icon::Sparkles} size={28} />
                        </div>
                        <h3 class="about-title">
                            {"The Intersection of "}<br />{"Art & Intelligence"}
                        </h3>
                        <p class="about-text">
                            {"I don't just write code; I craft systems. Leveraging "}
                            <span class="about-underline">{"Generative AI"}</span>
                            {" and "}
                            <span class="about-strong">{"Next-Gen Web Standards"}</span>
                            {", I build interfaces that feel alive\u{2014}minimalist, responsive, and unmistakably premium."}
                        </p>
                    </SpotlightCard>
                </FadeIn>

                <FadeIn delay={100} class={classes!("about-stack-cell")}>
                    <SpotlightCard class={classes!("about-stack")}>
                        <div>
                            <h3 class="about-stack-title">
                                <div class="about-stack-icon">
                                    <IconGlyph icon={Icon::Cpu} size={20} />
                                </div>
                                {"Core Stack"}
                            </h3>
                            <div class="pill-row">
                                { for CORE_STACK.iter().map(|tag| html! {
                                    <PillTagView key={tag.text} tag={*tag} />
                                }) }
                            </div>
                        </div>
                        <div class="about-stat">
                            <span class="about-stat-value">{SHIPPED_COUNT}</span>
                            <span class="about-stat-label">{SHIPPED_LABEL}</span>
                        </div>
                    </SpotlightCard>
                </FadeIn>
            </div>
        </section>
    }
}

#[function_component(Projects)]
fn projects() -> Html {
    html! {
        <section id="projects" class="section projects">
            <FadeIn class={classes!("section-heading")}>
                <div class="section-heading-icon">
                    <IconGlyph icon={Icon::LayoutTemplate} size={24} />
                </div>
                <h2>{"Featured Works"}</h2>
                <p>{"Scalable applications built with modern architecture and precision design."}</p>
            </FadeIn>

            <div class="project-grid">
                { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                    <FadeIn key={project.title} delay={project_reveal_delay(index)}>
                        <ProjectCard project={*project} />
                    </FadeIn>
                }) }
            </div>
        </section>
    }
}

#[function_component(Skills)]
fn skills() -> Html {
    let chips = marquee_sequence();

    html! {
        <section id="skills" class="section skills">
            <FadeIn>
                <div class="skills-heading">
                    <h2><ScrambleText text={SKILLS_HEADING} /></h2>
                </div>
                <div class="marquee">
                    <div class="marquee-fade marquee-fade-left"></div>
                    <div class="marquee-fade marquee-fade-right"></div>
                    <div class="marquee-track">
                        { for chips.iter().enumerate().map(|(index, skill)| html! {
                            <div key={index} class="marquee-chip">{*skill}</div>
                        }) }
                    </div>
                </div>
            </FadeIn>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    html! {
        <section id="contact" class="section contact">
            <FadeIn>
                <div class="contact-panel">
                    <div class="contact-panel-glow"></div>
                    <h2 class="contact-title">
                        {"Let's build the "}<br />
                        <span class="contact-title-accent">{"future."}</span>
                    </h2>
                    <p class="contact-lead">
                        {"Whether it's an AI-driven platform or a high-end graphic website."}
                    </p>
                    <div class="contact-grid">
                        { for CONTACT_CHANNELS.iter().map(|channel| html! {
                            <ContactLink key={channel.label} channel={*channel} />
                        }) }
                    </div>
                </div>
            </FadeIn>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer">
            <p>{copyright_line(year)}</p>
            <p class="site-footer-origin">
                {"Dev From "}
                <IconGlyph icon={Icon::Zap} size={10} class={classes!("site-footer-zap")} />
                {" India"}
            </p>
        </footer>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let viewport = use_reducer(Viewport::default);

    {
        let dispatcher = viewport.dispatcher();
        use_effect_with((), move |_| {
            if let Some(scroll_y) = current_scroll_y() {
                dispatcher.dispatch(ViewportAction::Scrolled(scroll_y));
            }
            let scroll = ScrollSubscription::attach(dispatcher.clone());

            let tracks_pointer = pointer_media_matches();
            let pointer = if tracks_pointer {
                dispatcher.dispatch(ViewportAction::PointerTracking(true));
                PointerSubscription::attach(dispatcher)
            } else {
                None
            };

            log_event(
                LogLevel::Info,
                "page_mounted",
                json!({
                    "scroll_listener": scroll.is_some(),
                    "pointer_listener": pointer.is_some(),
                    "projects": PROJECTS.len(),
                }),
            );

            move || {
                drop(pointer);
                drop(scroll);
            }
        });
    }

    html! {
        <ContextProvider<Viewport> context={*viewport}>
            <div class="page">
                <div
                    class="grain"
                    style={format!("background-image: url('{GRAIN_TEXTURE_URL}');")}
                    aria-hidden="true"
                ></div>
                <ParallaxBackground />
                <NavBar />
                <Hero />
                <About />
                <Projects />
                <Skills />
                <Contact />
                <Footer />
            </div>
        </ContextProvider<Viewport>>
    }
}

pub fn run() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
        .ok_or_else(|| JsValue::from_str("missing #app mount point"))?;

    yew::Renderer::<App>::with_root(root).render();
    Ok(())
}
