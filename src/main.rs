fn main() {
    brainphuck::term::main();
}
