use crate::client::{FetchError, HttpClueSource};
use clap::Args;
use jeopardy_core as game;
use jeopardy_protocol::DEFAULT_API_BASE;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Base URL of the trivia service
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// How many draws to make before giving up on a board
    #[arg(
        long,
        default_value_t = game::RetryPolicy::DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_attempts: u32,
}

impl Default for GameProps {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            max_attempts: game::RetryPolicy::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E> HasUpdate for Result<game::ActivateOutcome, E> {
    fn has_update(self) -> bool {
        self.map_or(false, |outcome: game::ActivateOutcome| outcome.has_update())
    }
}

pub(crate) enum Msg {
    StartGame,
    BoardLoaded(game::LoadTicket, game::AcquireResult<game::Board, FetchError>),
    CellActivated(game::CellCoords),
}

const fn start_label(started: bool) -> &'static str {
    if started { "RESTART" } else { "START" }
}

fn failure_message(failure: Option<&str>) -> String {
    match failure {
        Some(reason) => format!("Could not load a board. {reason}"),
        None => "Could not load a board.".to_string(),
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    face: game::CellFace,
    callback: Callback<game::CellCoords>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps { face, callback } = props.clone();
    let game::CellFace {
        coords,
        text,
        inviting,
    } = face;
    let (row, col) = coords;

    let class = classes!("clue", if inviting { "inviting" } else { "shown" });

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("({}, {}) click", row, col);
        callback.emit(coords);
    });

    html! {
        <td {class} data-row={row.to_string()} data-col={col.to_string()} {onclick}>{text}</td>
    }
}

/// Top-level view. Owns the game lifecycle, and with it the board.
#[derive(Debug)]
pub(crate) struct GameView {
    lifecycle: game::GameLifecycle,
    face: Option<game::BoardFace>,
}

impl GameView {
    fn start_game(&mut self, ctx: &Context<Self>) {
        self.face = None;
        let ticket = self.lifecycle.begin_loading();
        let config = self.lifecycle.config();
        let policy = self.lifecycle.policy();
        let mut source = HttpClueSource::new(ctx.props().api_base.clone());
        let link = ctx.link().clone();

        spawn_local(async move {
            let result = game::acquire_board(&mut source, config, policy).await;
            link.send_message(Msg::BoardLoaded(ticket, result));
        });
    }

    fn activate_cell(&mut self, coords: game::CellCoords) -> bool {
        let updated = self.lifecycle.on_cell_activated(coords).has_update();

        if updated {
            if let (Some(face), Some(board)) = (self.face.as_mut(), self.lifecycle.board()) {
                if let Err(err) = face.patch(board, coords) {
                    log::error!("failed to patch cell {:?}: {}", coords, err);
                }
            }
        }

        updated
    }

    fn view_board(&self, ctx: &Context<Self>, face: &game::BoardFace) -> Html {
        let callback = ctx.link().callback(Msg::CellActivated);

        html! {
            <table>
                <thead>
                    <tr>
                        {
                            for face.headers.iter().enumerate().map(|(col, title)| html! {
                                <th class={format!("col-{col}")}>{title.clone()}</th>
                            })
                        }
                    </tr>
                </thead>
                <tbody>
                    {
                        for face.rows.iter().enumerate().map(|(row, cells)| html! {
                            <tr class="row" id={format!("r{row}")}>
                                {
                                    for cells.iter().map(|cell| html! {
                                        <CellView face={cell.clone()} callback={callback.clone()}/>
                                    })
                                }
                            </tr>
                        })
                    }
                </tbody>
            </table>
        }
    }

    fn view_body(&self, ctx: &Context<Self>) -> Html {
        use game::GamePhase::*;

        match (self.lifecycle.phase(), self.face.as_ref()) {
            (Ready, Some(face)) => self.view_board(ctx, face),
            (Failed, _) => html! {
                <p class="failure">{failure_message(self.lifecycle.failure())}</p>
            },
            _ => html! {},
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let policy = game::RetryPolicy::new(ctx.props().max_attempts);
        Self {
            lifecycle: game::GameLifecycle::new(game::BoardConfig::STANDARD, policy),
            face: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            StartGame => {
                log::debug!("start requested");
                self.start_game(ctx);
                true
            }
            BoardLoaded(ticket, result) => {
                let accepted = self.lifecycle.finish_loading(ticket, result);
                if accepted {
                    self.face = self.lifecycle.board().map(game::BoardFace::render_full);
                }
                accepted
            }
            CellActivated(coords) => self.activate_cell(coords),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let loading = self.lifecycle.phase().is_loading();

        let cb_start = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::StartGame
        });

        html! {
            <div class="jeopardy">
                <h1>{"JEOPARDY"}</h1>
                <button class={classes!(loading.then_some("hidden"))} onclick={cb_start}>
                    {start_label(self.lifecycle.has_started())}
                </button>
                <span class={classes!("loader", (!loading).then_some("hidden"))}/>
                <div class="game-container">
                    {self.view_body(ctx)}
                </div>
            </div>
        }
    }
}
