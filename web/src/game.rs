use crate::utils::*;
use gloo::timers::callback::Timeout;
use memoria_core as game;
use game::{CardFace, CardId};
use yew::prelude::*;

const HIDDEN_LABEL: &str = "❓";

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Select(CardId),
    FlipBack(game::MismatchTicket),
    NewGame,
}

fn card_classes(face: CardFace, locked: bool) -> Classes {
    let mut class = classes!(
        "card",
        match face {
            CardFace::Hidden => classes!(),
            CardFace::Revealed => classes!("revealed"),
            CardFace::Matched => classes!("revealed", "matched"),
        }
    );
    if locked {
        class.push("locked");
    }
    class
}

fn card_label(face: CardFace, glyph: &str) -> &str {
    if face.is_face_up() { glyph } else { HIDDEN_LABEL }
}

#[derive(Properties, Clone, PartialEq)]
struct CardProps {
    id: CardId,
    face: CardFace,
    glyph: AttrValue,
    #[prop_or_default]
    locked: bool,
    callback: Callback<CardId>,
}

#[function_component(CardView)]
fn card_component(props: &CardProps) -> Html {
    let CardProps {
        id,
        face,
        glyph,
        locked,
        callback,
    } = props.clone();

    let class = card_classes(face, locked);
    let label = card_label(face, &glyph).to_string();

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("card {} clicked", id);
        callback.emit(id);
    });

    html! {
        <button {class} {onclick}>{label}</button>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    pub config: game::GameConfig,
    #[prop_or_default]
    pub seed: Option<u64>,
}

/// Something that stops a scheduled callback from ever running.
pub(crate) trait Abort {
    fn abort(self);
}

impl Abort for Timeout {
    fn abort(self) {
        drop(self.cancel());
    }
}

/// The at most one flip-back timer armed for a mismatched pair.
#[derive(Debug)]
pub(crate) struct PendingFlip<H> {
    slot: Option<(game::MismatchTicket, H)>,
}

impl<H> Default for PendingFlip<H> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<H: Abort> PendingFlip<H> {
    pub(crate) fn arm(&mut self, ticket: game::MismatchTicket, handle: H) {
        if let Some((stale, handle)) = self.slot.replace((ticket, handle)) {
            log::warn!("replaced a pending flip back: {:?}", stale);
            handle.abort();
        }
    }

    /// Forgets the timer that just fired, only if it is the one currently armed.
    pub(crate) fn fired(&mut self, ticket: game::MismatchTicket) -> bool {
        if self.ticket() == Some(ticket) {
            self.slot = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn cancel(&mut self) -> bool {
        match self.slot.take() {
            Some((ticket, handle)) => {
                log::debug!("pending flip back cancelled: {:?}", ticket);
                handle.abort();
                true
            }
            None => false,
        }
    }

    pub(crate) fn ticket(&self) -> Option<game::MismatchTicket> {
        self.slot.as_ref().map(|(ticket, _)| *ticket)
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    game: game::Game,
    pending_flip: PendingFlip<Timeout>,
}

impl GameView {
    fn schedule_flip_back(&mut self, ctx: &Context<Self>, ticket: game::MismatchTicket) {
        let link = ctx.link().clone();
        let millis = ticket.delay.as_millis().try_into().unwrap_or(u32::MAX);
        log::debug!("flip back in {}ms: {:?}", millis, ticket);
        let timeout = Timeout::new(millis, move || link.send_message(Msg::FlipBack(ticket)));
        self.pending_flip.arm(ticket, timeout);
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps { config, seed } = ctx.props().clone();
        let seed = seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);
        Self {
            game: game::Game::new(config, seed),
            pending_flip: PendingFlip::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Select(id) => {
                let outcome = self.game.select(id);
                log::debug!("select {}: {:?}", id, outcome);
                if let Some(ticket) = outcome.mismatch() {
                    self.schedule_flip_back(ctx, ticket);
                }
                outcome.has_update()
            }
            FlipBack(ticket) => {
                self.pending_flip.fired(ticket);
                self.game.resolve_mismatch(ticket).has_update()
            }
            NewGame => {
                self.pending_flip.cancel();
                self.game.reset(js_random_seed());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let round = self.game.snapshot();
        let alphabet = &self.game.config().alphabet;
        let columns = grid_columns(round.cards.len());
        let style = format!("grid-template-columns: repeat({}, auto)", columns);
        let callback = ctx.link().callback(Msg::Select);
        let cb_new_game = ctx.link().callback(|_: MouseEvent| Msg::NewGame);

        html! {
            <div class="memoria">
                <h1>{"Memory Game"}</h1>
                <div class={classes!("grid", round.is_awaiting_resolution.then_some("busy"))} {style}>
                    {
                        for round.cards.iter().map(|card| {
                            let id = card.id;
                            let face = card.face();
                            let glyph = AttrValue::from(alphabet.glyph(card.symbol).unwrap_or("?").to_string());
                            let locked = !self.game.round().can_select(id);
                            let callback = callback.clone();
                            html! {
                                <CardView key={id} {id} {face} {glyph} {locked} {callback}/>
                            }
                        })
                    }
                </div>
                if round.is_complete {
                    <button class="play-again" onclick={cb_new_game}>{"Play Again"}</button>
                }
            </div>
        }
    }
}
