/// Cost-ordered search shared by Dijkstra and A*. Modelled on
/// [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html),
/// but with dense per-cell tables instead of a hash map and with a visit reported for every
/// closed cell.
use num_traits::Zero;

use crate::cell::CellKind;
use crate::cell_map::CellMap;
use crate::error::Cancelled;
use crate::grid::Grid;
use crate::open_set::{OpenSet, SmallestCostHolder};
use crate::path::{reconstruct, PathResult};
use crate::position::Position;
use crate::visit::{Tracer, VisitationSink};

pub(crate) fn best_first<K, S, FC, FH>(
    grid: &Grid,
    start: Position,
    goal: Position,
    tracer: &mut Tracer<'_, S>,
    mut cost: FC,
    mut heuristic: FH,
) -> Result<PathResult, Cancelled>
where
    K: Zero + Ord + Copy,
    S: VisitationSink + ?Sized,
    FC: FnMut(CellKind) -> Option<K>,
    FH: FnMut(Position) -> K,
{
    let (rows, cols) = (grid.rows(), grid.cols());
    let mut closed = CellMap::new(rows, cols, false);
    let mut parents: CellMap<Option<Position>> = CellMap::new(rows, cols, None);
    let mut best_cost: CellMap<Option<K>> = CellMap::new(rows, cols, None);
    let mut open = OpenSet::new();

    best_cost[start] = Some(K::zero());
    open.push(start, K::zero(), heuristic(start));

    while let Some(SmallestCostHolder {
        cost: g,
        position: current,
        ..
    }) = open.pop()
    {
        if current == goal {
            return Ok(PathResult::Found(reconstruct(&parents, goal)));
        }
        // A cell may have been pushed several times if a cheaper route to it turned up
        // later. The cheapest entry is popped first and closes the cell, so the others
        // are stale.
        if closed[current] {
            continue;
        }
        closed[current] = true;
        tracer.visit(current)?;

        for n in grid.passable_neighbors(current) {
            if closed[n] {
                continue;
            }
            let Some(move_cost) = cost(grid.get(n)) else {
                continue;
            };
            let new_cost = g + move_cost;
            if best_cost[n].map_or(true, |old| new_cost < old) {
                best_cost[n] = Some(new_cost);
                parents[n] = Some(current);
                open.push(n, new_cost, new_cost + heuristic(n));
            }
        }
    }
    Ok(PathResult::NotFound)
}
