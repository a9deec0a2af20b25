use crate::core::carousel::Carousel;
use crate::core::contact;
use crate::core::filter::{Card, CardFilter};
use crate::core::modal::ModalController;
use crate::core::navigator::{NavKey, SectionNavigator};
use crate::core::notify::Notifier;
use crate::core::post::PostWorkflow;
use crate::core::search::SearchController;
use crate::domain::model::Timings;
use crate::domain::ports::{BlogApi, Surface};
use crate::domain::view::{CarouselId, ModalKind, Patch};
use std::sync::Arc;
use std::time::Instant;

/// Everything the host can feed the engine. Events are handled in
/// arrival order; the only suspension points are network awaits.
#[derive(Debug, Clone)]
pub enum Event {
    DotClicked(usize),
    Wheel { delta_y: f64 },
    NavKey(NavKey),
    LogoClicked,
    CarouselPrev(CarouselId),
    CarouselNext(CarouselId),
    CarouselDot(CarouselId, usize),
    /// Viewport resize changed this carousel's item width.
    CarouselResized(CarouselId, u32),
    ContactOpened,
    ContactSubmitted {
        name: String,
        email: String,
        message: String,
    },
    CloseClicked,
    EscapePressed,
    SearchInput(String),
    /// Click outside the search input and its results panel.
    OutsideClick,
    ChipClicked(usize),
    /// "Read more" on a card, or a card-body click delegated to it.
    CardActivated(usize),
    ReactionClicked { is_like: bool },
    CommentDraftChanged(String),
    CommentSubmitted {
        author: String,
        email: String,
        body: String,
    },
    CommentsToggled,
}

/// Static page structure the engine is driven against. In the browser
/// this comes out of the DOM; headless hosts describe it directly.
#[derive(Debug, Clone, Default)]
pub struct PageSetup {
    pub sections: usize,
    pub about_items: usize,
    pub about_item_width: u32,
    pub project_items: usize,
    pub project_item_width: u32,
    pub chips: Vec<String>,
    pub cards: Vec<Card>,
}

/// The page engine: wires events to components and pushes every patch to
/// the host surface.
pub struct Page<A: BlogApi + 'static> {
    surface: Arc<dyn Surface>,
    navigator: SectionNavigator,
    about: Carousel,
    projects: Carousel,
    modals: ModalController,
    search: SearchController<A>,
    filter: CardFilter,
    post: PostWorkflow<A>,
    notifier: Arc<Notifier>,
}

impl<A: BlogApi + 'static> Page<A> {
    pub fn new(api: Arc<A>, surface: Arc<dyn Surface>, setup: PageSetup, timings: Timings) -> Self {
        let notifier = Arc::new(Notifier::new(Arc::clone(&surface), timings.toast_ttl));
        Self {
            navigator: SectionNavigator::new(setup.sections, &timings),
            about: Carousel::new(CarouselId::About, setup.about_items, setup.about_item_width),
            projects: Carousel::new(
                CarouselId::Projects,
                setup.project_items,
                setup.project_item_width,
            ),
            modals: ModalController::new(),
            search: SearchController::new(Arc::clone(&api), Arc::clone(&surface), &timings),
            filter: CardFilter::new(setup.chips, setup.cards, timings.collapse_delay),
            post: PostWorkflow::new(api, Arc::clone(&surface), Arc::clone(&notifier)),
            notifier,
            surface,
        }
    }

    /// Initial render: section 0 active, carousels on their first slide.
    pub fn bootstrap(&mut self) {
        self.surface.apply(Patch::PageLoaded);
        let patches = self.navigator.bootstrap();
        self.emit(patches);
        let patches = self.about.show(0);
        self.emit(patches);
        let patches = self.projects.show(0);
        self.emit(patches);
    }

    pub async fn handle(&mut self, event: Event) {
        let now = Instant::now();
        match event {
            Event::DotClicked(index) => {
                let patches = self.navigator.go_to(index, now);
                self.emit(patches);
            }
            Event::Wheel { delta_y } => {
                let patches = self.navigator.wheel(delta_y, now);
                self.emit(patches);
            }
            Event::NavKey(key) => {
                let patches = self.navigator.key(key, now);
                self.emit(patches);
            }
            Event::LogoClicked => {
                let patches = self.navigator.go_to(0, now);
                self.emit(patches);
            }
            Event::CarouselPrev(id) => {
                let patches = self.carousel(id).prev();
                self.emit(patches);
            }
            Event::CarouselNext(id) => {
                let patches = self.carousel(id).next();
                self.emit(patches);
            }
            Event::CarouselDot(id, dot) => {
                let patches = self.carousel(id).select(dot);
                self.emit(patches);
            }
            Event::CarouselResized(id, width) => {
                let patches = self.carousel(id).set_item_width(width);
                self.emit(patches);
            }
            Event::ContactOpened => {
                let patches = self.modals.open(ModalKind::Contact);
                self.emit(patches);
            }
            Event::ContactSubmitted {
                name,
                email,
                message,
            } => {
                let patches = contact::submit_contact(
                    &mut self.modals,
                    &self.notifier,
                    &name,
                    &email,
                    &message,
                );
                self.emit(patches);
            }
            Event::CloseClicked | Event::EscapePressed => {
                let patches = self.modals.close_all();
                self.emit(patches);
            }
            Event::SearchInput(query) => self.search.input(&query),
            Event::OutsideClick => self.search.dismiss(),
            Event::ChipClicked(index) => {
                let patches = self.filter.select(index, now);
                self.emit(patches);
            }
            Event::CardActivated(card) => {
                if let Some(post_id) = self.filter.post_id(card) {
                    let patches = self.modals.open(ModalKind::Post);
                    self.emit(patches);
                    self.post.open(post_id).await;
                }
            }
            Event::ReactionClicked { is_like } => self.post.react(is_like).await,
            Event::CommentDraftChanged(text) => self.post.comment_draft(&text),
            Event::CommentSubmitted {
                author,
                email,
                body,
            } => self.post.submit_comment(&author, &email, &body).await,
            Event::CommentsToggled => self.post.toggle_comments(),
        }
    }

    /// Time-based housekeeping (deferred card collapses). Hosts call this
    /// on their frame timer; tests pass a synthetic clock.
    pub fn tick(&mut self, now: Instant) {
        let patches = self.filter.sweep(now);
        self.emit(patches);
    }

    pub fn current_section(&self) -> usize {
        self.navigator.current()
    }

    fn carousel(&mut self, id: CarouselId) -> &mut Carousel {
        match id {
            CarouselId::About => &mut self.about,
            CarouselId::Projects => &mut self.projects,
        }
    }

    fn emit(&self, patches: Vec<Patch>) {
        for patch in patches {
            self.surface.apply(patch);
        }
    }
}
