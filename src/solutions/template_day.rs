use crate::app::Solution;

pub struct Day;

impl Solution for Day {
    fn step_one(&self) {
        let input = include_str!("input.txt");
        let _ = input;
        println!("step one: not solved yet");
    }

    fn step_two(&self) {
        let input = include_str!("input.txt");
        let _ = input;
        println!("step two: not solved yet");
    }
}
