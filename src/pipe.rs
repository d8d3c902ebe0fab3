use crate::stream::Stream;
use std::cmp::Ordering;
use std::rc::Rc;

type PipeFn<I, O> = Rc<dyn Fn(&Stream<I>) -> Stream<O>>;

/// A Pipe represents a reusable stream transformation from one type to another.
/// It's a function from Stream[I] to Stream[O], applied eagerly like every other stage.
pub struct Pipe<I, O> {
    f: PipeFn<I, O>,
}

impl<I, O> Clone for Pipe<I, O> {
    fn clone(&self) -> Self {
        Pipe {
            f: Rc::clone(&self.f),
        }
    }
}

impl<I, O> Pipe<I, O> {
    /// Create a new pipe from a function
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Stream<I>) -> Stream<O> + 'static,
    {
        Pipe { f: Rc::new(f) }
    }

    /// Apply this pipe to a stream
    pub fn apply(&self, input: &Stream<I>) -> Stream<O> {
        (self.f)(input)
    }
}

/// Create a pipe that applies the given function to each element
pub fn map<I, O, F>(f: F) -> Pipe<I, O>
where
    F: Fn(&I) -> O + 'static,
    I: 'static,
    O: 'static,
{
    Pipe::new(move |input: &Stream<I>| input.map_to(&f))
}

/// Create a pipe that filters elements based on the predicate
pub fn filter<I, F>(predicate: F) -> Pipe<I, I>
where
    F: Fn(&I) -> bool + 'static,
    I: Clone + 'static,
{
    Pipe::new(move |input: &Stream<I>| input.filter(&predicate))
}

/// Create a pipe that stably sorts elements with the comparator
pub fn sorted<I, F>(comparator: F) -> Pipe<I, I>
where
    F: Fn(&I, &I) -> Ordering + 'static,
    I: Clone + 'static,
{
    Pipe::new(move |input: &Stream<I>| input.sorted(&comparator))
}

/// Compose two pipes together
pub fn compose<I, M, O>(p1: Pipe<I, M>, p2: Pipe<M, O>) -> Pipe<I, O>
where
    I: 'static,
    M: 'static,
    O: 'static,
{
    Pipe::new(move |input: &Stream<I>| p2.apply(&p1.apply(input)))
}

/// Identity pipe that doesn't transform the stream
pub fn identity<I>() -> Pipe<I, I>
where
    I: 'static,
{
    Pipe::new(|input: &Stream<I>| input.to_stream())
}

/// Extension trait for pipes
pub trait PipeExt<I, O> {
    /// Compose this pipe with another pipe
    fn compose<P>(self, other: Pipe<O, P>) -> Pipe<I, P>
    where
        P: 'static;
}

impl<I, O> PipeExt<I, O> for Pipe<I, O>
where
    I: 'static,
    O: 'static,
{
    fn compose<P>(self, other: Pipe<O, P>) -> Pipe<I, P>
    where
        P: 'static,
    {
        compose(self, other)
    }
}
