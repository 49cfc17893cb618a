mod setup;

mod pool;
