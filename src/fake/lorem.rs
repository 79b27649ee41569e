pub const WORDS: &[&str] = &[
    "alias", "consequatur", "aut", "perferendis", "sit", "voluptatem", "accusantium", "doloremque",
    "aperiam", "eaque", "ipsa", "quae", "ab", "illo", "inventore", "veritatis", "et", "quasi",
    "architecto", "beatae", "vitae", "dicta", "sunt", "explicabo", "aspernatur", "odit", "fugit",
    "sed", "quia", "consequuntur", "magni", "dolores", "eos", "qui", "ratione", "sequi",
    "nesciunt", "neque", "dolorem", "ipsum", "dolor", "amet", "consectetur", "adipisci", "velit",
    "non", "numquam", "eius", "modi", "tempora", "incidunt", "ut", "labore", "dolore", "magnam",
    "aliquam", "quaerat", "enim", "ad", "minima", "veniam", "quis", "nostrum", "exercitationem",
    "ullam", "corporis", "nemo", "ipsam", "voluptas", "suscipit", "laboriosam", "nisi",
    "aliquid", "ex", "ea", "commodi", "autem", "vel", "eum", "iure", "reprehenderit", "in",
    "voluptate", "esse", "quam", "nihil", "molestiae", "iusto", "odio", "dignissimos", "ducimus",
    "blanditiis", "praesentium", "laudantium", "totam", "rem", "voluptatum", "deleniti",
    "atque", "corrupti", "quos", "quas", "molestias", "excepturi", "sint", "occaecati",
    "cupiditate", "provident", "perspiciatis", "unde", "omnis", "iste", "natus", "error",
    "similique", "culpa", "officia", "deserunt", "mollitia", "animi", "id", "est", "laborum",
    "dolorum", "fuga", "harum", "quidem", "rerum", "facilis", "expedita", "distinctio", "nam",
    "libero", "tempore", "cum", "soluta", "nobis", "eligendi", "optio", "cumque", "impedit",
    "quo", "porro", "quisquam", "minus", "quod", "maxime", "placeat", "facere", "possimus",
    "assumenda", "repellendus", "temporibus", "quibusdam", "illum", "fugiat", "nulla",
    "pariatur", "at", "vero", "accusamus", "officiis", "debitis", "necessitatibus", "saepe",
    "eveniet", "voluptates", "repudiandae", "recusandae", "itaque", "earum", "hic", "tenetur",
    "a", "sapiente", "delectus", "reiciendis", "voluptatibus", "maiores", "doloribus",
    "asperiores", "repellat",
];
