use rummy::{Card, Game, GameOptions, RULES, Snapshot, TurnPhase};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmRummy {
    game: Game,
}

#[wasm_bindgen]
impl WasmRummy {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
        }
    }

    /// Starts a new game shuffled from `seed`.
    pub fn reset(&self, seed: u32) {
        self.game.reseed(seed as u64);
        self.game.start_game();
    }

    pub fn start_game(&self) {
        self.game.start_game();
    }

    pub fn draw_from_deck(&self) -> Result<(), JsValue> {
        self.game.draw_from_deck().map(|_| ()).map_err(js_err)
    }

    pub fn draw_from_discard(&self) -> Result<(), JsValue> {
        self.game.draw_from_discard().map(|_| ()).map_err(js_err)
    }

    /// Discards a card named by its printed form, e.g. `"10♥"`.
    pub fn discard(&self, card: &str) -> Result<(), JsValue> {
        let card = Card::parse(card).map_err(js_err)?;
        self.game.discard(card).map_err(js_err)
    }

    pub fn rules(&self) -> String {
        RULES.to_string()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let view = View::new(&self.game, self.game.snapshot());
        to_js_value(&view)
    }
}

#[derive(Serialize)]
struct View {
    phase: &'static str,
    prompt: Option<&'static str>,
    winner: bool,
    deck_len: u32,
    can_draw_from_deck: bool,
    can_draw_from_discard: bool,
    top_discard: Option<JsCard>,
    hand: Vec<JsCard>,
    hand_discardable: bool,
}

impl View {
    fn new(game: &Game, snapshot: Snapshot) -> Self {
        Self {
            phase: phase_to_str(snapshot.turn_phase),
            prompt: snapshot.prompt(),
            winner: snapshot.winner,
            deck_len: snapshot.deck_len as u32,
            can_draw_from_deck: game.can_draw_from_deck(),
            can_draw_from_discard: game.can_draw_from_discard(),
            top_discard: snapshot.top_discard.map(card_to_js),
            hand_discardable: snapshot.hand_is_discardable(),
            hand: snapshot.player_hand.into_iter().map(card_to_js).collect(),
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    rank: &'static str,
    suit: &'static str,
    label: String,
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        rank: card.rank.symbol(),
        suit: card.suit.symbol(),
        label: card.to_string(),
    }
}

fn phase_to_str(phase: TurnPhase) -> &'static str {
    match phase {
        TurnPhase::Draw => "Draw",
        TurnPhase::Discard => "Discard",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
