use rand::Rng;

use heap_pq::{PriorityQueue, QueueConfig, QueueResult};

pub fn task_queue_example() -> QueueResult<()> {
    let mut tasks = PriorityQueue::new();
    tasks.insert_all(vec![
        (3, "write report"),
        (1, "fix outage"),
        (2, "review patch"),
        (5, "clean desk"),
    ])?;
    tasks.change_priority(&"clean desk", 0)?;
    println!("next up: {}", tasks.peek()?);
    while !tasks.is_empty() {
        let priority = tasks.priority_of(tasks.peek()?).unwrap_or_default();
        let task = tasks.remove_front()?;
        println!("{}\t{}", priority, task);
    }
    Ok(())
}

pub fn random_drain_example() -> QueueResult<()> {
    let mut rng = rand::thread_rng();
    let mut queue = PriorityQueue::with_config(QueueConfig::dropping());
    for id in 0..10 {
        // some of these are negative and get dropped
        queue.insert(rng.gen_range(-5, 20), id)?;
    }
    println!("kept {} of 10", queue.size());
    for (priority, id) in queue.into_sorted_vec() {
        println!("{}\t{}", priority, id);
    }
    Ok(())
}

pub fn main() {
    if let Err(e) = task_queue_example().and_then(|_| random_drain_example()) {
        eprintln!("{}", e);
    }
}
