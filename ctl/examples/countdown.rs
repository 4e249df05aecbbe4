//! The ready-made catalogue and the function adapters in action.

const fn collatz(i: u32) -> u32 {
    if i % 2 == 0 {
        i / 2
    } else {
        i * 3 + 1
    }
}

ctl::make_update!(Collatz, u32, collatz);

const fn not_settled(i: u32, n: u32) -> bool {
    i != n
}

ctl::make_test!(NotSettled, u32, not_settled);

fn main() {
    // 10 9 8 7 6 5 4 3 2 1
    let _ = ctl::for_loop!(
        u32,
        start = 10,
        bound = 0,
        update = ctl::ops::u32::Dec<1>,
        test = ctl::ops::u32::GreaterThan,
        action = ctl::ops::u32::PrintIndex<' '>,
    );
    println!();

    // collatz orbit of 27, resolved before the program runs
    let _ = ctl::for_loop!(
        u32,
        start = 27,
        bound = 1,
        update = Collatz,
        test = NotSettled,
        action = ctl::ops::u32::PrintIndex<' '>,
        fuel = 128,
    );
    println!();
}
