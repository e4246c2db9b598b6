//! Fixture games for integration tests.
//!
//! - `SubtractSquare`: subtract a square number, reaching 0 wins
//! - `TicTacToe`: the usual 3x3 game, with draws and transpositions
//! - `TreeGame`: an explicit, hand-built game graph for exact scenarios

#![allow(dead_code)]

use std::sync::Arc;

use zerosum::core::Result;
use zerosum::{Game, GameState, PlayerId, SearchError};

fn parse_number<T: std::str::FromStr>(input: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    input.trim().parse().map_err(|e: T::Err| SearchError::ParseMove {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

// =============================================================================
// Subtract Square
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubtractState {
    pub value: u32,
    pub player: PlayerId,
}

impl GameState for SubtractState {
    type Move = u32;

    fn acting_player(&self) -> PlayerId {
        self.player
    }

    fn legal_moves(&self) -> Vec<u32> {
        (1..).map(|i| i * i).take_while(|&sq| sq <= self.value).collect()
    }

    fn make_move(&self, mv: &u32) -> Self {
        if !self.is_valid_move(mv) {
            return self.clone();
        }
        Self {
            value: self.value - mv,
            player: self.player.opponent(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SubtractSquare {
    current: SubtractState,
}

impl SubtractSquare {
    pub fn new(value: u32, first: PlayerId) -> Self {
        Self {
            current: SubtractState { value, player: first },
        }
    }
}

impl Game for SubtractSquare {
    type State = SubtractState;

    fn current_state(&self) -> &SubtractState {
        &self.current
    }

    fn set_current_state(&mut self, state: SubtractState) {
        self.current = state;
    }

    fn is_over(&self, state: &SubtractState) -> bool {
        state.value == 0
    }

    fn is_winner(&self, state: &SubtractState, player: PlayerId) -> bool {
        self.is_over(state) && state.player != player
    }

    fn parse_move(&self, input: &str) -> Result<u32> {
        parse_number(input)
    }

    fn instructions(&self) -> String {
        "Subtract a square number. Whoever reaches 0 wins.".to_string()
    }
}

impl zerosum::RoughOutcome for SubtractSquare {}

// =============================================================================
// Tic-tac-toe
// =============================================================================

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub cells: [Option<PlayerId>; 9],
    pub player: PlayerId,
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [None; 9],
            player: PlayerId::P1,
        }
    }

    /// Board after playing `moves` in order from an empty board.
    pub fn from_moves(moves: &[usize]) -> Self {
        moves.iter().fold(Self::empty(), |board, mv| board.make_move(mv))
    }

    pub fn line_owner(&self) -> Option<PlayerId> {
        LINES.iter().find_map(|&[a, b, c]| {
            let owner = self.cells[a]?;
            (self.cells[b] == Some(owner) && self.cells[c] == Some(owner)).then_some(owner)
        })
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

impl GameState for Board {
    type Move = usize;

    fn acting_player(&self) -> PlayerId {
        self.player
    }

    fn legal_moves(&self) -> Vec<usize> {
        if self.line_owner().is_some() {
            return Vec::new();
        }
        (0..9).filter(|&i| self.cells[i].is_none()).collect()
    }

    fn make_move(&self, mv: &usize) -> Self {
        if !self.is_valid_move(mv) {
            return self.clone();
        }
        let mut next = self.clone();
        next.cells[*mv] = Some(self.player);
        next.player = self.player.opponent();
        next
    }
}

#[derive(Clone, Debug)]
pub struct TicTacToe {
    current: Board,
}

impl TicTacToe {
    pub fn new() -> Self {
        Self { current: Board::empty() }
    }

    pub fn from_moves(moves: &[usize]) -> Self {
        Self {
            current: Board::from_moves(moves),
        }
    }
}

impl Game for TicTacToe {
    type State = Board;

    fn current_state(&self) -> &Board {
        &self.current
    }

    fn set_current_state(&mut self, state: Board) {
        self.current = state;
    }

    fn is_over(&self, state: &Board) -> bool {
        state.line_owner().is_some() || state.is_full()
    }

    fn is_winner(&self, state: &Board, player: PlayerId) -> bool {
        state.line_owner() == Some(player)
    }

    fn parse_move(&self, input: &str) -> Result<usize> {
        parse_number(input)
    }

    fn instructions(&self) -> String {
        "Claim cells 0-8. Three in a row wins.".to_string()
    }
}

// =============================================================================
// Explicit game graph
// =============================================================================

#[derive(Clone, Debug)]
enum TreeNode {
    /// Game over with an optional winner.
    Leaf { player: PlayerId, winner: Option<PlayerId> },
    /// Game continues; move `i` leads to `children[i]`.
    Branch { player: PlayerId, children: Vec<usize> },
    /// Not over, yet no moves. A broken game.
    DeadEnd { player: PlayerId },
}

/// Hand-built game graph. Children may be shared to model transpositions.
#[derive(Clone, Debug, Default)]
pub struct GameTree {
    nodes: Vec<TreeNode>,
}

impl GameTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leaf(&mut self, player: PlayerId, winner: Option<PlayerId>) -> usize {
        self.push(TreeNode::Leaf { player, winner })
    }

    pub fn branch(&mut self, player: PlayerId, children: &[usize]) -> usize {
        self.push(TreeNode::Branch {
            player,
            children: children.to_vec(),
        })
    }

    pub fn dead_end(&mut self, player: PlayerId) -> usize {
        self.push(TreeNode::DeadEnd { player })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    fn push(&mut self, node: TreeNode) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }
}

/// A position in a `GameTree`. Equal iff it is the same node.
#[derive(Clone, Debug)]
pub struct TreeState {
    tree: Arc<GameTree>,
    pub at: usize,
}

impl TreeState {
    fn node(&self) -> &TreeNode {
        &self.tree.nodes[self.at]
    }

    pub fn at(&self, at: usize) -> Self {
        Self {
            tree: Arc::clone(&self.tree),
            at,
        }
    }
}

impl PartialEq for TreeState {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at
    }
}

impl Eq for TreeState {}

impl std::hash::Hash for TreeState {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.at.hash(state);
    }
}

impl GameState for TreeState {
    type Move = usize;

    fn acting_player(&self) -> PlayerId {
        match self.node() {
            TreeNode::Leaf { player, .. }
            | TreeNode::Branch { player, .. }
            | TreeNode::DeadEnd { player } => *player,
        }
    }

    fn legal_moves(&self) -> Vec<usize> {
        match self.node() {
            TreeNode::Branch { children, .. } => (0..children.len()).collect(),
            _ => Vec::new(),
        }
    }

    fn make_move(&self, mv: &usize) -> Self {
        match self.node() {
            TreeNode::Branch { children, .. } if *mv < children.len() => self.at(children[*mv]),
            _ => self.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct TreeGame {
    current: TreeState,
}

impl TreeGame {
    pub fn new(tree: GameTree, root: usize) -> Self {
        Self {
            current: TreeState {
                tree: Arc::new(tree),
                at: root,
            },
        }
    }

    /// State of any node of this game's tree.
    pub fn state(&self, at: usize) -> TreeState {
        self.current.at(at)
    }
}

impl Game for TreeGame {
    type State = TreeState;

    fn current_state(&self) -> &TreeState {
        &self.current
    }

    fn set_current_state(&mut self, state: TreeState) {
        self.current = state;
    }

    fn is_over(&self, state: &TreeState) -> bool {
        matches!(state.node(), TreeNode::Leaf { .. })
    }

    fn is_winner(&self, state: &TreeState, player: PlayerId) -> bool {
        matches!(state.node(), TreeNode::Leaf { winner: Some(w), .. } if *w == player)
    }

    fn parse_move(&self, input: &str) -> Result<usize> {
        parse_number(input)
    }

    fn instructions(&self) -> String {
        "Pick a branch by index.".to_string()
    }
}
