//! Basic Queue, Set and Walker usage example

use std::convert::Infallible;

use frontier::{Queue, Set, Walker};

fn main() -> anyhow::Result<()> {
    println!("Queue");
    println!("=====");
    let mut queue: Queue<i32> = [1, 2, 3].into_iter().collect();
    queue.push(4);
    println!("  head: {}", queue.peek()?);
    println!("  popped: {}", queue.pop()?);
    println!("  remaining: {queue:?}");
    queue.clear();
    if let Err(err) = queue.pop() {
        println!("  pop after clear: {err}");
    }

    println!("\nSet");
    println!("===");
    let a = Set::from([1, 2, 3]);
    let b = Set::from([3, 4, 5]);
    let show = |s: &Set<i32>| s.iter_sorted().map(ToString::to_string).collect::<Vec<_>>().join(", ");
    println!("  a ∪ b = {{{}}}", show(&a.union(&b)));
    println!("  a ∩ b = {{{}}}", show(&a.intersection(&b)));
    println!("  a \\ b = {{{}}}", show(&a.difference(&b)));
    println!("  a △ b = {{{}}}", show(&a.symmetric_difference(&b)));

    println!("\nWalker");
    println!("======");
    // Binary tree over 1..=15 with a back edge from every leaf to the root.
    let mut walker = Walker::with_seeds([1u32]);
    walker.visit_with(|node, enqueue| -> Result<(), Infallible> {
        println!("  visiting {node}");
        if node * 2 <= 15 {
            enqueue.extend([node * 2, node * 2 + 1]);
        } else {
            enqueue.push(1);
        }
        Ok(())
    })?;
    println!("  visited {} nodes", walker.visited().len());

    Ok(())
}
