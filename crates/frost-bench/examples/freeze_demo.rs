//! Freeze-array demo driver.
//!
//! Demonstrates: small array fill → indexed reads → traversal, then a
//! 1M-element timing and memory comparison against `Vec<i32>`.

use std::time::Instant;

use frost::FreezeArray;

const ELEMENTS: usize = 1_000_000;

fn main() {
    println!("=== Frost Freeze Array Demo ===\n");

    {
        let mut array = FreezeArray::new(10);

        for i in 0..10i32 {
            array.push(i).unwrap();
        }

        print!("Indexed reads: ");
        for i in 0..10 {
            print!("{} ", array[i]);
        }
        println!();

        print!("Traversal:     ");
        for element in &array {
            print!("{element} ");
        }
        println!();
    } // Array goes out of scope and its buffer is released here.

    let start = Instant::now();

    let memory_bytes;
    {
        let mut array = FreezeArray::new(ELEMENTS);

        for i in 0..ELEMENTS {
            array.push(i as i32).unwrap();
        }
        memory_bytes = array.memory_bytes() + std::mem::size_of::<FreezeArray<i32>>();
    }

    let duration = start.elapsed();
    println!("\nExecution time for FreezeArray<i32>: {:.6} seconds", duration.as_secs_f64());
    println!("Approximate memory usage for FreezeArray<i32>: {memory_bytes} bytes");

    // Comparison with Vec<i32>, grown cold so it pays incremental reallocation.
    {
        let mut vec = Vec::new();

        let vec_start = Instant::now();

        for i in 0..ELEMENTS {
            vec.push(i as i32);
        }

        let vec_duration = vec_start.elapsed();

        let vec_memory_bytes = vec.len() * std::mem::size_of::<i32>() + std::mem::size_of::<Vec<i32>>();

        println!("\nComparison with Vec<i32>:");
        println!("Execution time for Vec<i32>: {:.6} seconds", vec_duration.as_secs_f64());
        println!("Approximate memory usage for Vec<i32>: {vec_memory_bytes} bytes");
    }
}
