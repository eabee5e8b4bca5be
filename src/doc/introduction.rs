/*!
# Introduction

Write a program into a file and hand it to the interpreter.
<pre><code>&nbsp;$ echo '++++++++[>++++++++<-]>+.' > a.bf
&nbsp;$ brainphuck a.bf
&nbsp;A
</code></pre>

Each byte of the file is one instruction. The machine has a data tape of
16384 byte cells, all zero when the program starts, and a data pointer
that starts on the leftmost cell. Cells wrap, so decrementing a zero
cell leaves 255 in it.

Any byte that isn't one of the eight operators stops the program with
an error that names the byte and its address. That includes spaces and
newlines. Pass `--extension` to get line comments and whitespace.

<pre><code>&nbsp;$ cat five.bf
&nbsp;+++++ # five
&nbsp;.     # print it
&nbsp;$ brainphuck --extension five.bf | od -An -tu1
&nbsp;   5
</code></pre>

Stop a running program with CTRL-C. A program waiting on `,` reads a
line from the terminal, one byte per `,`, with the newline last. At the
end of input `,` stores zero.

## Breakpoints

`--breakpoint ADDR` pauses before the instruction at program address
`ADDR` every time execution reaches it, prints the registers, then
carries on.
<pre><code>&nbsp;$ brainphuck -b 4 count.bf
&nbsp;BREAK AT 4 OP DEC PTR 0 CELL 3 BKTID 1 BKTCTR 0 SS 0
</code></pre>

Set `RUST_LOG=debug` to watch the machine initialize and fault,
`RUST_LOG=trace` adds every loop branch.

*/
