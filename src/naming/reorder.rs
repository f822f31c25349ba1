use std::cmp::Ordering;

use log::{debug, trace};

use crate::chain::Chain;
use crate::error::ChainError;
use crate::group::Group;
use crate::naming::radical_stem;

/// Number the chain from whichever end gives the lowest locants.
///
/// Functions are compared in priority order by the sum of their positions;
/// the first one that differs decides. When the radicals tie on position,
/// their names decide alphabetically, pair by pair in backbone order.
pub(crate) fn reorient(chain: &Chain, functions: &[Group]) -> Result<Chain, ChainError> {
    let reversed = chain.reversed()?;
    for &function in functions {
        let forward: usize = chain.positions_of(function).iter().sum();
        let backward: usize = reversed.positions_of(function).iter().sum();
        trace!("reorient: {function} locant sums {forward} / {backward}");
        if forward != backward {
            return Ok(pick(chain, reversed, backward < forward, function));
        }
        if function == Group::Radical {
            let forward = radical_stems(chain)?;
            let backward = radical_stems(&reversed)?;
            for (a, b) in forward.iter().zip(&backward) {
                match compare_shared_prefix(a, b) {
                    Ordering::Greater => return Ok(pick(chain, reversed, true, function)),
                    Ordering::Less => return Ok(chain.clone()),
                    Ordering::Equal => {}
                }
            }
            break;
        }
    }
    Ok(chain.clone())
}

fn pick(chain: &Chain, reversed: Chain, flip: bool, decided_by: Group) -> Chain {
    if flip {
        debug!("reorient: numbering from the other end ({decided_by})");
        reversed
    } else {
        chain.clone()
    }
}

fn radical_stems(chain: &Chain) -> Result<Vec<String>, ChainError> {
    chain.radicals().map(radical_stem).collect()
}

/// Character comparison over the shorter of the two names; a name that is
/// a prefix of the other compares equal.
fn compare_shared_prefix(a: &str, b: &str) -> Ordering {
    a.chars()
        .zip(b.chars())
        .map(|(x, y)| x.cmp(&y))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}
