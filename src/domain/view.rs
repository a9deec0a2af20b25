//! Declarative render output. Components never touch a DOM; they emit
//! [`Patch`] values and the host applies them to whatever surface it owns
//! (a browser shim, a TUI, a test recorder).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Contact,
    Post,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarouselId {
    About,
    Projects,
}

/// Regions whose markup is rebuilt wholesale on each render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    SearchResults,
    PostTitle,
    PostMeta,
    PostBody,
    PostComments,
}

/// Char-counter color thresholds for the comment textarea.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterLevel {
    Green,
    Amber,
    Red,
}

/// Visibility lifecycle of a filtered card. `FadingOut` keeps the card in
/// layout until the collapse delay elapses; re-showing in between returns
/// it to `Visible` and cancels the pending collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPhase {
    Visible,
    FadingOut,
    Collapsed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Patch {
    /// Emitted once at startup, when the engine takes over the page.
    PageLoaded,
    SectionActive { index: usize },
    SectionInactive { index: usize },
    FooterCompact(bool),
    /// Decorative layer shown only on the first section.
    DecorLayer(bool),
    CarouselSlide {
        carousel: CarouselId,
        translate_px: i64,
        active_dot: usize,
    },
    ModalVisible { modal: ModalKind, visible: bool },
    ScrollLock(bool),
    ReplaceHtml { region: Region, html: String },
    SearchPanel { visible: bool },
    ChipActive { index: usize },
    Card { index: usize, phase: CardPhase },
    Toast {
        id: u64,
        message: String,
        kind: ToastKind,
    },
    ToastDismiss { id: u64 },
    /// Comment submit control disabled with a busy label while a round
    /// trip is in flight.
    SubmitBusy(bool),
    CharCounter { count: usize, level: CounterLevel },
    /// Transient press feedback on a reaction button, before the server
    /// answers.
    ReactionPressed { is_like: bool },
    ReactionActive { like: bool, dislike: bool },
    ReactionCounts { likes: String, dislikes: String },
    EngagementRatio { width_pct: String, label: String },
    CommentsPanel { visible: bool, label: String },
    ContactFormReset,
}
