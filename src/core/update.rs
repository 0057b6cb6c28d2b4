use crate::core::{HanoiError, Move, Rod, Tower};

impl Tower {
    /// Every `(from, to)` pair of distinct rods whose top disk may move.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for (from, src) in self.rods.iter().enumerate() {
            for (to, dst) in self.rods.iter().enumerate() {
                if from != to && src.can_shift_to(dst) {
                    moves.push(Move { from, to });
                }
            }
        }
        moves
    }

    /// All towers one legal move away, in no particular order.
    pub fn neighbours(&self) -> Vec<Tower> {
        self.legal_moves()
            .into_iter()
            .map(|action| self.moved(action))
            .collect()
    }

    pub fn apply_move(&self, action: Move) -> Result<Tower, HanoiError> {
        let rod_count = self.rods.len();
        for rod in [action.from, action.to] {
            if rod >= rod_count {
                return Err(HanoiError::RodOutOfRange { rod, rod_count });
            }
        }
        if action.from == action.to {
            return Err(HanoiError::SameRod { rod: action.from });
        }
        if !self.rods[action.from].can_shift_to(&self.rods[action.to]) {
            return Err(HanoiError::IllegalMove {
                from: action.from,
                to: action.to,
            });
        }
        Ok(self.moved(action))
    }

    // the move is applied to a fresh copy of every rod, `self` stays untouched
    fn moved(&self, action: Move) -> Tower {
        let mut rods = self.rods.clone();
        let (src, dst) = rod_pair_mut(&mut rods, action.from, action.to);
        src.shift_to(dst);
        Tower { rods }
    }
}

fn rod_pair_mut(rods: &mut [Rod], first: usize, second: usize) -> (&mut Rod, &mut Rod) {
    assert_ne!(first, second, "a rod cannot be paired with itself");
    if first < second {
        let (low, high) = rods.split_at_mut(second);
        (&mut low[first], &mut high[0])
    } else {
        let (low, high) = rods.split_at_mut(first);
        (&mut high[0], &mut low[second])
    }
}
