//! Connected components of unwrapped cells.

use indexmap::IndexSet;
use wrapbot_core::{Cell, Point, MOVES};
use wrapbot_space::Grid;

/// Split the FREE cells of `grid` into 4-connected components.
///
/// Seeds are scanned column by column (`x` outer, `y` inner) and each
/// component is filled depth-first; both the component order and the
/// member order within a component are deterministic.
pub fn fb_partition(grid: &Grid) -> Vec<IndexSet<Point>> {
    let width = grid.width() as usize;
    let slot = |p: Point| (p.y as usize) * width + (p.x as usize);
    let open = |p: Point| grid.get(p) == Some(Cell::Free);

    let mut seen = vec![false; grid.cell_count()];
    let mut components = Vec::new();
    for seed in grid.points() {
        if seen[slot(seed)] || !open(seed) {
            continue;
        }
        seen[slot(seed)] = true;
        let mut component = IndexSet::new();
        component.insert(seed);
        let mut stack = vec![seed];
        while let Some(u) = stack.pop() {
            for d in MOVES {
                let v = d.step(u);
                if open(v) && !seen[slot(v)] {
                    seen[slot(v)] = true;
                    component.insert(v);
                    stack.push(v);
                }
            }
        }
        components.push(component);
    }
    components
}
