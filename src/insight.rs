//! Pedagogical metadata attached to every operation result
//!
//! Each panel shows, next to the structure, a textbook C snippet for the
//! operation just performed, the lines of it worth staring at, a few
//! explanatory bullet points, and a complexity table. The catalog below
//! re-derives this on every operation; `Clear`/`Randomize` reset a panel to
//! its structure default.
//!
//! Scripts are static line arrays so the renderer can highlight individual
//! lines by index.

/// Big-O summary: ordered case-label → bound pairs plus a space bound
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Complexity {
    pub time: Vec<(&'static str, &'static str)>,
    pub space: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insight {
    pub title: String,
    pub script: &'static [&'static str],
    /// Zero-based indices into `script`
    pub highlighted_lines: Vec<usize>,
    pub points: Vec<String>,
    pub complexity: Complexity,
}

impl Insight {
    fn new(title: &str, script: &'static [&'static str]) -> Self {
        Insight {
            title: title.to_string(),
            script,
            highlighted_lines: Vec::new(),
            points: Vec::new(),
            complexity: Complexity {
                time: Vec::new(),
                space: "O(1)",
            },
        }
    }

    fn lines(mut self, lines: &[usize]) -> Self {
        self.highlighted_lines = lines.to_vec();
        self
    }

    fn point(mut self, text: impl Into<String>) -> Self {
        self.points.push(text.into());
        self
    }

    fn time(mut self, case: &'static str, bound: &'static str) -> Self {
        self.complexity.time.push((case, bound));
        self
    }

    fn space(mut self, bound: &'static str) -> Self {
        self.complexity.space = bound;
        self
    }
}

pub mod array {
    use super::Insight;

    const INSERT: &[&str] = &[
        "void insert(int index, int value) {",
        "  // Shift elements to the right",
        "  for (int i = size; i > index; i--) {",
        "    arr[i] = arr[i - 1];",
        "  }",
        "  arr[index] = value;",
        "  size++;",
        "}",
    ];

    const DELETE: &[&str] = &[
        "void delete(int index) {",
        "  // Shift elements to the left",
        "  for (int i = index; i < size - 1; i++) {",
        "    arr[i] = arr[i + 1];",
        "  }",
        "  size--;",
        "}",
    ];

    const SEARCH: &[&str] = &[
        "int search(int value) {",
        "  for (int i = 0; i < size; i++) {",
        "    if (arr[i] == value) {",
        "      return i; // Found",
        "    }",
        "  }",
        "  return -1; // Not found",
        "}",
    ];

    pub fn default() -> Insight {
        Insight::new("Array (Vector)", INSERT)
            .point("A contiguous block of memory holding elements of the same type.")
            .point("Provides O(1) access time with an index.")
            .point("Insertion and deletion can be slow (O(n)) as elements may need shifting.")
            .time("Access", "O(1)")
            .time("Search/Insert/Delete", "O(n)")
            .space("O(n)")
    }

    pub fn insert(index: usize, value: i32) -> Insight {
        Insight::new("Insert", INSERT)
            .lines(&[1, 5])
            .point(format!("Inserting value {} at index {}.", value, index))
            .point(format!("Elements from index {} are shifted right.", index))
            .time("Worst Case", "O(n)")
    }

    pub fn delete(index: usize) -> Insight {
        Insight::new("Delete", DELETE)
            .lines(&[1, 3])
            .point(format!("Deleting element at index {}.", index))
            .point(format!("Elements from index {} are shifted left.", index + 1))
            .time("Worst Case", "O(n)")
    }

    pub fn search_found(value: i32, index: usize) -> Insight {
        Insight::new("Search: Found", SEARCH)
            .lines(&[1, 2, 3])
            .point(format!("Searching for value {}.", value))
            .point(format!("Found at index {}.", index))
            .time("Worst Case", "O(n)")
    }

    pub fn search_missed(value: i32) -> Insight {
        Insight::new("Search: Not Found", SEARCH)
            .lines(&[1, 6])
            .point(format!("Searching for value {}.", value))
            .point("Value not found after iterating through the array.")
            .time("Worst Case", "O(n)")
    }
}

pub mod stack {
    use super::Insight;

    const PUSH: &[&str] = &[
        "void push(int value) {",
        "  if (top >= MAX_SIZE - 1) {",
        "    // Handle stack overflow",
        "    return;",
        "  }",
        "  arr[++top] = value;",
        "}",
    ];

    const POP: &[&str] = &[
        "int pop() {",
        "  if (top < 0) {",
        "    // Handle stack underflow",
        "    return -1;",
        "  }",
        "  return arr[top--];",
        "}",
    ];

    const PEEK: &[&str] = &[
        "int peek() {",
        "  if (top < 0) {",
        "    // Handle stack underflow",
        "    return -1;",
        "  }",
        "  return arr[top];",
        "}",
    ];

    pub fn default() -> Insight {
        Insight::new("Stack", PUSH)
            .point("A LIFO (Last-In, First-Out) data structure.")
            .point("Elements are added (push) and removed (pop) from the same end, called the \"top\".")
            .point("Commonly used for managing function calls, parsing expressions, and undo features.")
            .time("Access/Search", "O(n)")
            .time("Push/Pop", "O(1)")
            .space("O(n)")
    }

    pub fn push(value: i32) -> Insight {
        Insight::new("Push", PUSH)
            .lines(&[5])
            .point(format!("Pushing value {} onto the stack.", value))
            .time("Operation", "O(1)")
    }

    pub fn pop(value: i32) -> Insight {
        Insight::new("Pop", POP)
            .lines(&[5])
            .point(format!("Popping value {} from the stack.", value))
            .time("Operation", "O(1)")
    }

    pub fn peek(value: i32) -> Insight {
        Insight::new("Peek", PEEK)
            .lines(&[5])
            .point(format!("Peeking at the top value: {}.", value))
            .time("Operation", "O(1)")
    }
}

pub mod queue {
    use super::Insight;

    const ENQUEUE: &[&str] = &[
        "void enqueue(int value) {",
        "  // Add element to the rear",
        "  // ... implementation ...",
        "}",
    ];

    const DEQUEUE: &[&str] = &[
        "int dequeue() {",
        "  // Remove element from the front",
        "  // ... implementation ...",
        "  return value;",
        "}",
    ];

    const PEEK: &[&str] = &[
        "int peek() {",
        "  // Return element from the front",
        "  // ... implementation ...",
        "  return front_value;",
        "}",
    ];

    pub fn default() -> Insight {
        Insight::new("Queue", ENQUEUE)
            .point("A FIFO (First-In, First-Out) data structure.")
            .point("Elements are added (enqueue) to the rear and removed (dequeue) from the front.")
            .point("Used in scheduling, print queues, and breadth-first search (BFS) algorithms.")
            .time("Access/Search", "O(n)")
            .time("Enqueue/Dequeue", "O(1)")
            .space("O(n)")
    }

    pub fn enqueue(value: i32) -> Insight {
        Insight::new("Enqueue", ENQUEUE)
            .point(format!("Enqueuing value {} to the rear of the queue.", value))
            .time("Operation", "O(1)")
    }

    pub fn dequeue(value: i32) -> Insight {
        Insight::new("Dequeue", DEQUEUE)
            .point(format!(
                "Dequeuing value {} from the front of the queue.",
                value
            ))
            .time("Operation", "O(1)")
    }

    pub fn peek(value: i32) -> Insight {
        Insight::new("Peek", PEEK)
            .point(format!("Peeking at the front value: {}.", value))
            .time("Operation", "O(1)")
    }
}

pub mod list {
    use super::Insight;
    use crate::structures::list::End;

    const INSERT: &[&str] = &[
        "void insert(Node* prev_node, int new_data) {",
        "  Node* new_node = new Node();",
        "  new_node->data = new_data;",
        "  new_node->next = prev_node->next;",
        "  prev_node->next = new_node;",
        "}",
    ];

    const DELETE: &[&str] = &[
        "void deleteNode(Node** head_ref, int key) {",
        "  // ... find node to delete ...",
        "  // ... handle head case ...",
        "  prev->next = temp->next;",
        "  free(temp);",
        "}",
    ];

    const SEARCH: &[&str] = &[
        "bool search(Node* head, int x) {",
        "  Node* current = head;",
        "  while (current != NULL) {",
        "    if (current->data == x) return true;",
        "    current = current->next;",
        "  }",
        "  return false;",
        "}",
    ];

    pub fn default() -> Insight {
        Insight::new("Singly Linked List", INSERT)
            .point("A collection of nodes where each node points to the next.")
            .point("Efficient insertions and deletions (O(1)) if the position is known.")
            .point("Access and search time are linear (O(n)) as it requires traversal.")
            .time("Access/Search", "O(n)")
            .time("Insert/Delete", "O(1)")
            .space("O(n)")
    }

    pub fn insert(end: End, value: i32) -> Insight {
        let place = match end {
            End::Head => "head",
            End::Tail => "tail",
        };
        let title = match end {
            End::Head => "Insert Head",
            End::Tail => "Insert Tail",
        };
        Insight::new(title, INSERT)
            .lines(&[3, 4])
            .point(format!("Inserting value {} at the {}.", value, place))
            .point("Update pointers to link the new node.")
            .time("Operation", "O(1)")
    }

    pub fn delete(value: i32) -> Insight {
        Insight::new("Delete", DELETE)
            .lines(&[3, 4])
            .point(format!("Deleting node with value {}.", value))
            .point("Update pointers of the previous node.")
            .time("Worst Case", "O(n)")
    }

    pub fn search_found(value: i32) -> Insight {
        Insight::new("Search: Found", SEARCH)
            .lines(&[3])
            .point(format!("Searching for value {}.", value))
            .point(format!("Found node with value {}.", value))
            .time("Worst Case", "O(n)")
    }

    pub fn search_missed(value: i32) -> Insight {
        Insight::new("Search: Not Found", SEARCH)
            .lines(&[6])
            .point(format!("Searching for value {}.", value))
            .point("Reached the end of the list without a match.")
            .time("Worst Case", "O(n)")
    }
}

pub mod bst {
    use super::Insight;

    const INSERT: &[&str] = &[
        "void insert(int value) {",
        "  // ... find correct position ...",
        "  if (value < current->value) {",
        "    current->left = newNode;",
        "  } else {",
        "    current->right = newNode;",
        "  }",
        "}",
    ];

    const SEARCH: &[&str] = &[
        "bool search(int value) {",
        "  // ... traverse tree ...",
        "  if (value < current->value) {",
        "    current = current->left;",
        "  } else if (value > current->value) {",
        "    current = current->right;",
        "  } else {",
        "    return true; // Found",
        "  }",
        "}",
    ];

    pub fn default() -> Insight {
        Insight::new("Binary Search Tree", INSERT)
            .point("A node-based binary tree with a special property.")
            .point("The value of a left child is always less than the parent's value.")
            .point("The value of a right child is always greater than the parent's value.")
            .point("Provides O(log n) time for search, insert, and delete on average.")
            .time("Avg", "O(log n)")
            .time("Worst", "O(n)")
            .space("O(n)")
    }

    pub fn insert(value: i32) -> Insight {
        Insight::new("Insert", INSERT)
            .lines(&[2, 5])
            .point(format!("Inserting value {}.", value))
            .point("Traverse to find the correct leaf position.")
            .time("Avg", "O(log n)")
            .time("Worst", "O(n)")
    }

    pub fn search_found(value: i32) -> Insight {
        Insight::new("Search: Found", SEARCH)
            .lines(&[7])
            .point(format!("Searching for {}.", value))
            .point("Value found in the tree.")
            .time("Avg", "O(log n)")
            .time("Worst", "O(n)")
    }

    pub fn search_missed(value: i32) -> Insight {
        Insight::new("Search: Not Found", SEARCH)
            .point(format!("Searching for {}.", value))
            .point("Value not found in the tree.")
            .time("Avg", "O(log n)")
            .time("Worst", "O(n)")
    }
}

pub mod graph {
    use super::Insight;
    use crate::recorder::traversal::Algo;

    const BFS: &[&str] = &[
        "void BFS(int startNode) {",
        "  queue.push(startNode);",
        "  visited[startNode] = true;",
        "  while (!queue.empty()) {",
        "    // ... process node ...",
        "    // ... add neighbors to queue ...",
        "  }",
        "}",
    ];

    const DFS: &[&str] = &[
        "void DFS(int node) {",
        "  visited[node] = true;",
        "  // ... process node ...",
        "  for (int neighbor : adj[node]) {",
        "    if (!visited[neighbor]) {",
        "      DFS(neighbor);",
        "    }",
        "  }",
        "}",
    ];

    pub fn default() -> Insight {
        Insight::new("Graph", BFS)
            .point("A collection of nodes (or vertices) and edges that connect them.")
            .point("Can be directed or undirected, weighted or unweighted.")
            .point("Used to model networks, social connections, and maps.")
            .point("Common traversal algorithms are BFS and DFS.")
            .time("Add Vertex", "O(1)")
            .time("Add Edge", "O(1)")
            .time("BFS/DFS", "O(V+E)")
            .space("O(V+E)")
    }

    pub fn traversal(algo: Algo, start: &str) -> Insight {
        let (title, script) = match algo {
            Algo::Bfs => ("BFS", BFS),
            Algo::Dfs => ("DFS", DFS),
        };
        Insight::new(title, script)
            .point(format!("Running {} from node {}.", title, start))
            .time("Traversal", "O(V+E)")
            .space("O(V)")
    }
}

pub mod hash {
    use super::Insight;

    const INSERT: &[&str] = &[
        "void insert(int key, int value) {",
        "  int index = hash(key);",
        "  // Handle collision by chaining",
        "  // (e.g., add to linked list at table[index])",
        "  table[index].push_back({key, value});",
        "}",
    ];

    const SEARCH: &[&str] = &[
        "int search(int key) {",
        "  int index = hash(key);",
        "  // Search the list at table[index]",
        "  for (auto& pair : table[index]) {",
        "    if (pair.key == key) return pair.value;",
        "  }",
        "  return -1; // Not found",
        "}",
    ];

    const DELETE: &[&str] = &[
        "void remove(int key) {",
        "  int index = hash(key);",
        "  // Find the element in the chain",
        "  // and remove it from the list",
        "  // ... (implementation for removal)",
        "}",
    ];

    pub fn default() -> Insight {
        Insight::new("Hash Table (Separate Chaining)", INSERT)
            .point("Maps keys to values for O(1) average time complexity.")
            .point("A hash function computes an index from the key.")
            .point("Collisions (multiple keys mapping to the same index) are handled with chaining (using linked lists).")
            .time("Average", "O(1)")
            .time("Worst", "O(n)")
            .space("O(n)")
    }

    pub fn insert(key: i32, bucket: usize) -> Insight {
        Insight::new("Insert", INSERT)
            .lines(&[1, 4])
            .point(format!("Hashed key {} to index {}.", key, bucket))
            .point("Appended the new element to the chain.")
            .time("Average", "O(1)")
            .time("Worst", "O(n)")
    }

    pub fn search_found(key: i32, bucket: usize) -> Insight {
        Insight::new("Search: Found", SEARCH)
            .lines(&[1, 3, 4])
            .point(format!("Hashed key {} to index {}.", key, bucket))
            .point(format!("Found key {} in the chain.", key))
            .time("Average", "O(1)")
            .time("Worst", "O(n)")
    }

    pub fn search_missed(key: i32, bucket: usize) -> Insight {
        Insight::new("Search: Not Found", SEARCH)
            .lines(&[1, 6])
            .point(format!("Hashed key {} to index {}.", key, bucket))
            .point(format!("Key {} was not found in the chain.", key))
            .time("Average", "O(1)")
            .time("Worst", "O(n)")
    }

    pub fn delete(key: i32, bucket: usize) -> Insight {
        Insight::new("Delete", DELETE)
            .lines(&[1, 2, 4])
            .point(format!("Hashed key {} to index {}.", key, bucket))
            .point(format!("Preparing to remove key {}.", key))
            .time("Average", "O(1)")
            .time("Worst", "O(n)")
    }
}

pub mod sorting {
    use super::Insight;
    use crate::recorder::sorting::SortAlgo;

    const BUBBLE: &[&str] = &[
        "void bubbleSort(int arr[], int n) {",
        "  for (int i = 0; i < n - 1; i++) {",
        "    for (int j = 0; j < n - i - 1; j++) {",
        "      if (arr[j] > arr[j + 1]) {",
        "        swap(&arr[j], &arr[j + 1]);",
        "      }",
        "    }",
        "  }",
        "}",
    ];

    const SELECTION: &[&str] = &[
        "void selectionSort(int arr[], int n) {",
        "  for (int i = 0; i < n - 1; i++) {",
        "    int min_idx = i;",
        "    for (int j = i + 1; j < n; j++) {",
        "      if (arr[j] < arr[min_idx]) {",
        "        min_idx = j;",
        "      }",
        "    }",
        "    swap(&arr[min_idx], &arr[i]);",
        "  }",
        "}",
    ];

    const INSERTION: &[&str] = &[
        "void insertionSort(int arr[], int n) {",
        "  for (int i = 1; i < n; i++) {",
        "    int key = arr[i];",
        "    int j = i - 1;",
        "    while (j >= 0 && arr[j] > key) {",
        "      arr[j + 1] = arr[j];",
        "      j = j - 1;",
        "    }",
        "    arr[j + 1] = key;",
        "  }",
        "}",
    ];

    const MERGE: &[&str] = &[
        "void mergeSort(int arr[], int l, int r) {",
        "  if (l < r) {",
        "    int m = l + (r - l) / 2;",
        "    mergeSort(arr, l, m);",
        "    mergeSort(arr, m + 1, r);",
        "    merge(arr, l, m, r);",
        "  }",
        "}",
    ];

    pub fn default() -> Insight {
        Insight::new("Sorting Algorithms", BUBBLE)
            .point("Algorithms to arrange elements in a certain order.")
            .point("Efficiency is measured by time and space complexity.")
            .point("Different algorithms are suitable for different scenarios.")
            .time("Bubble Sort", "O(n²)")
            .time("Merge Sort", "O(n log n)")
            .space("O(1) / O(n)")
    }

    pub fn algorithm(algo: SortAlgo) -> Insight {
        match algo {
            SortAlgo::Bubble => Insight::new("Bubble Sort", BUBBLE)
                .point("Compares adjacent elements and swaps them if they are in the wrong order.")
                .point("The pass through the array is repeated until the array is sorted.")
                .time("Best", "O(n)")
                .time("Avg/Worst", "O(n²)"),
            SortAlgo::Selection => Insight::new("Selection Sort", SELECTION)
                .point("Repeatedly finds the minimum element from the unsorted part.")
                .point("Puts the minimum element at the beginning of the unsorted part.")
                .time("Best/Avg/Worst", "O(n²)"),
            SortAlgo::Insertion => Insight::new("Insertion Sort", INSERTION)
                .point("Builds the final sorted array one item at a time.")
                .point(
                    "It iterates through an input array and removes one element per iteration, \
                     finds the place the element belongs in the array, and then places it there.",
                )
                .time("Best", "O(n)")
                .time("Avg/Worst", "O(n²)"),
            SortAlgo::Merge => Insight::new("Merge Sort", MERGE)
                .point("A \"divide and conquer\" algorithm.")
                .point(
                    "Recursively divides the array into two halves, sorts them, \
                     and then merges them back together.",
                )
                .time("Best/Avg/Worst", "O(n log n)")
                .space("O(n)"),
        }
    }
}
