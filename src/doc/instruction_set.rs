/*!
# Instruction Set

## Core

| Byte | Name | Effect |
|------|------|--------|
| `>` | PTRINC | move the data pointer one cell right |
| `<` | PTRDEC | move the data pointer one cell left |
| `+` | INC | add one to the current cell, 255 wraps to 0 |
| `-` | DEC | subtract one from the current cell, 0 wraps to 255 |
| `.` | PUTCHAR | output the current cell |
| `,` | GETCHAR | store one input byte in the current cell |
| `[` | LOOP | skip past the matching `]` if the current cell is zero |
| `]` | ENDLOOP | go back to the matching `[` if the current cell is not zero |

Moving the pointer left of the first cell or right of the last cell is
an error. So is a `]` with no loop to close.

## Extension

Only with `--extension`.

| Byte | Name | Effect |
|------|------|--------|
| `#` | REM | ignore everything up to the end of the line |
| newline | ENDREM | end a comment |
| space, tab, CR | NOP | nothing |
| `(` | PUSH | reserved, does nothing |
| `)` | POP | copy the current cell into the stack register |
| `@` | JUMP | continue after the program address held in the current cell |
| `&` | SYSCALL | reserved, does nothing |

A comment hides operators too, `+# ++` adds one.

`@` moves to the address in the cell and, like every other instruction,
steps past it, so `@` with 4 in the cell runs address 5 next. When that
lands on the program length the program ends, anything past it is an
error.

## Loops

Brackets are matched while the program runs. There is no pass over the
program beforehand, so a program with an extra `[` runs fine until the
machine actually needs the missing `]`.

```text
-[+[-]]++++.
```
The outer loop is entered because the cell is 255. The inner `[` sees
a zero cell and skips to its own `]`. The outer loop then ends and
`++++.` outputs 4.

*/
