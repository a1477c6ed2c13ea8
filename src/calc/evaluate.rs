//! Two-tier evaluation of the expression stack.
//!
//! Multiplicative operators are folded left to right first, then additive
//! ones. There are no parentheses.

use super::error::EngineError;
use super::policy::OperatorTable;
use super::state::{Operation, StackItem};

/// Reduces `Number (Operation Number)*` to a single value.
pub fn evaluate(stack: &[StackItem], table: &OperatorTable) -> Result<f64, EngineError> {
    let mut items = stack.to_vec();
    loop {
        match items.as_slice() {
            [] => return Err(EngineError::malformed("empty stack")),
            [StackItem::Number(value)] => return Ok(*value),
            [StackItem::Operation(op)] => {
                return Err(EngineError::malformed(format!("lone operator {op:?}")))
            }
            _ => {}
        }

        let next = match fold_first(&items, table, Operation::is_multiplicative)? {
            Some(next) => next,
            None => fold_first(&items, table, |op| !op.is_multiplicative())?.ok_or_else(|| {
                EngineError::malformed(format!(
                    "unable to calculate with {} items left",
                    items.len()
                ))
            })?,
        };
        items = next;
    }
}

/// Applies the leftmost operator accepted by `select` to its two neighbours.
///
/// Returns `Ok(None)` when no such operator exists.
fn fold_first(
    items: &[StackItem],
    table: &OperatorTable,
    select: impl Fn(Operation) -> bool,
) -> Result<Option<Vec<StackItem>>, EngineError> {
    let found = items.iter().enumerate().find_map(|(index, item)| match item {
        StackItem::Operation(op) if select(*op) => Some((index, *op)),
        _ => None,
    });
    let Some((index, op)) = found else {
        return Ok(None);
    };

    if index == 0 {
        return Err(EngineError::malformed("operator at the beginning of the stack"));
    }
    if index == items.len() - 1 {
        return Err(EngineError::malformed("operator at the end of the stack"));
    }
    let StackItem::Number(left) = items[index - 1] else {
        return Err(EngineError::malformed("non-number on the left of an operator"));
    };
    let StackItem::Number(right) = items[index + 1] else {
        return Err(EngineError::malformed("non-number on the right of an operator"));
    };

    let mut next = Vec::with_capacity(items.len() - 2);
    next.extend_from_slice(&items[..index - 1]);
    next.push(StackItem::Number(table.apply(op, left, right)));
    next.extend_from_slice(&items[index + 2..]);
    Ok(Some(next))
}
