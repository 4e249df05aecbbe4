//! Prints Fibonacci numbers computed at compile time, two ways: a counter
//! loop whose action evaluates `fib` in a const block, and a stateful loop
//! threading the recurrence itself through the expansion.

const fn fib(n: u64) -> u64 {
    if n < 2 {
        n
    } else {
        fib(n - 1) + fib(n - 2)
    }
}

struct PrintFib;

impl PrintFib {
    fn run<const N: u64>() {
        // the lookup happens during compilation; only the printing is runtime
        println!("fib({N}) = {}", const { fib(N) });
    }
}

const fn keep_going(s: (u64, u64, u64)) -> bool {
    s.0 < s.2
}

const fn advance(s: (u64, u64, u64)) -> (u64, u64, u64) {
    (s.1, s.0 + s.1, s.2)
}

fn main() {
    // fibonacci numbers 0 through 19
    let _ = ctl::for_loop!(
        u64,
        start = 0,
        bound = 20,
        update = ctl::ops::u64::Inc<1>,
        test = ctl::ops::u64::LessThan,
        action = PrintFib,
    );

    // and in reverse, 25 down to 21
    let _ = ctl::for_loop!(
        u64,
        start = 25,
        bound = 20,
        update = ctl::ops::u64::Dec<1>,
        test = ctl::ops::u64::GreaterThan,
        action = PrintFib,
    );

    // the recurrence as loop state: (current, next, limit)
    println!("fibonacci numbers below 10000:");
    let _ = ctl::while_loop!(
        state: (u64, u64, u64) = (0, 1, 10_000),
        test = keep_going,
        step = advance,
        visit = |s: (u64, u64, u64)| print!("{} ", s.0),
    );
    println!();
}
