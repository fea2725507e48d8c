use drawpoker::{Card, Game, Hand, RoundResult, RoundState, Suit, TableOptions, WinningHand};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, balance: u32) -> Self {
        Self {
            game: Game::new(options(balance), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32, balance: u32) {
        self.game = Game::new(options(balance), seed as u64);
    }

    pub fn bet(&mut self) -> Result<JsValue, JsValue> {
        let initial = self.game.bet().map_err(js_err)?;
        to_js_value(&JsWinningHand::from(&initial))
    }

    pub fn toggle_hold(&mut self, position: u32) -> Result<bool, JsValue> {
        self.game.toggle_hold(position as usize).map_err(js_err)
    }

    pub fn redraw(&mut self) -> Result<JsValue, JsValue> {
        let result = self.game.redraw().map_err(js_err)?;
        to_js_value(&JsRoundResult::from(&result))
    }

    pub fn finish(&mut self) -> Result<(), JsValue> {
        self.game.finish().map_err(js_err)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            state: state_to_str(self.game.state()),
            balance: self.game.balance() as u32,
            bet: self.game.current_bet() as u32,
            hand: self.game.hand().map(JsHand::from),
            initial: self.game.initial_outcome().map(JsWinningHand::from),
            result: self.game.result().map(JsRoundResult::from),
            cards_remaining: self.game.cards_remaining() as u32,
        };

        to_js_value(&snapshot)
    }
}

fn options(balance: u32) -> TableOptions {
    TableOptions::default().with_starting_balance(balance as usize)
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    balance: u32,
    bet: u32,
    hand: Option<JsHand>,
    initial: Option<JsWinningHand>,
    result: Option<JsRoundResult>,
    cards_remaining: u32,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
}

#[derive(Serialize)]
struct JsHand {
    cards: Vec<JsCard>,
    held: Vec<bool>,
    locked: bool,
}

impl From<&Hand> for JsHand {
    fn from(hand: &Hand) -> Self {
        Self {
            cards: hand.cards().iter().copied().map(card_to_js).collect(),
            held: (0..hand.cards().len()).map(|i| hand.is_held(i)).collect(),
            locked: hand.is_locked(),
        }
    }
}

#[derive(Serialize)]
struct JsWinningHand {
    title: &'static str,
    multiplier: u32,
    cards: Vec<JsCard>,
}

impl From<&WinningHand> for JsWinningHand {
    fn from(winning: &WinningHand) -> Self {
        Self {
            title: winning.title(),
            multiplier: winning.multiplier() as u32,
            cards: winning.cards().iter().copied().map(card_to_js).collect(),
        }
    }
}

#[derive(Serialize)]
struct JsRoundResult {
    initial: JsWinningHand,
    outcome: JsWinningHand,
    replaced: Vec<JsCard>,
    bet: u32,
    payout: u32,
    net: i32,
    balance: u32,
}

impl From<&RoundResult> for JsRoundResult {
    fn from(result: &RoundResult) -> Self {
        Self {
            initial: JsWinningHand::from(&result.initial),
            outcome: JsWinningHand::from(&result.outcome),
            replaced: result.replaced.iter().copied().map(card_to_js).collect(),
            bet: result.bet as u32,
            payout: result.payout as u32,
            net: result.net as i32,
            balance: result.balance as u32,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit()),
        rank: card.rank(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Spades => "Spades",
        Suit::Clubs => "Clubs",
        Suit::Diamonds => "Diamonds",
    }
}

fn state_to_str(state: RoundState) -> &'static str {
    match state {
        RoundState::AwaitingBet => "AwaitingBet",
        RoundState::HandDealt => "HandDealt",
        RoundState::AwaitingRedraw => "AwaitingRedraw",
        RoundState::RoundResolved => "RoundResolved",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
